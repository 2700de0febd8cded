use std::sync::Arc;

use iced::{Size, Task};
use paddock_api::ProfileSource;

use super::event::{ProfileEffect, ProfileEvent, ProfileIntent};
use super::model::ProfileMenuAction;
use super::state::ProfileState;
use crate::dismiss::{Boundary, OverlayRegistrar};
use crate::generation::FetchGenerations;
use crate::layout;

/// Read-only context for profile badge reduction.
pub(crate) struct ProfileCtx<'a> {
    pub(crate) overlays: &'a dyn OverlayRegistrar<ProfileIntent>,
    pub(crate) window: Size,
    pub(crate) source: &'a Arc<dyn ProfileSource>,
    pub(crate) generations: &'a FetchGenerations,
}

/// Reduce a profile badge intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut ProfileState,
    event: ProfileIntent,
    ctx: &ProfileCtx<'_>,
) -> Task<ProfileEvent> {
    match event {
        ProfileIntent::Fetch => fetch(state, ctx),
        ProfileIntent::Fetched { generation, result } => {
            if generation != state.generation() {
                log::debug!("discarding stale profile fetch {generation}");
                return Task::none();
            }
            if let Err(err) = &result {
                log::warn!("profile fetch failed: {err}");
            }
            state.apply_fetched(result);
            Task::none()
        },
        ProfileIntent::ToggleMenu => {
            if state.is_menu_open() {
                state.set_menu(None);
            } else {
                let handle = ctx.overlays.register_overlay(
                    menu_boundary(ctx.window),
                    ProfileIntent::DismissMenu,
                );
                state.set_menu(Some(handle));
            }
            Task::none()
        },
        ProfileIntent::DismissMenu | ProfileIntent::DismissAll => {
            state.set_menu(None);
            Task::none()
        },
        ProfileIntent::MenuAction(action) => {
            state.set_menu(None);
            let effect = match action {
                ProfileMenuAction::Account => ProfileEffect::AccountRequested,
                ProfileMenuAction::SignOut => ProfileEffect::SignOutRequested,
            };
            Task::done(ProfileEvent::Effect(effect))
        },
        ProfileIntent::Relayout => {
            if let Some(handle) = state.menu() {
                handle.set_boundary(menu_boundary(ctx.window));
            }
            Task::none()
        },
    }
}

fn fetch(state: &mut ProfileState, ctx: &ProfileCtx<'_>) -> Task<ProfileEvent> {
    let generation = ctx.generations.next();
    state.begin_fetch(generation);
    let source = Arc::clone(ctx.source);

    Task::perform(
        async move { source.profile().await.map_err(|err| err.to_string()) },
        move |result| {
            ProfileEvent::Intent(ProfileIntent::Fetched { generation, result })
        },
    )
}

/// Dropdown surface plus the badge that toggles it.
fn menu_boundary(window: Size) -> Boundary {
    Boundary::new(layout::profile_menu_rect(
        window,
        ProfileMenuAction::ALL.len(),
    ))
    .with(layout::profile_trigger_rect(window))
}
