use iced::Task;

use crate::app::{App, AppEvent};
use crate::dismiss::MappedRegistrar;
use crate::widgets::profile::{
    ProfileCtx, ProfileEffect, ProfileEvent, ProfileIntent,
};
use crate::widgets::sidebar::{NavItem, SidebarIntent};

/// Route a profile badge event through reduction or orchestration.
pub(crate) fn route(app: &mut App, event: ProfileEvent) -> Task<AppEvent> {
    match event {
        ProfileEvent::Intent(event) => route_intent(app, event),
        ProfileEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: ProfileIntent) -> Task<AppEvent> {
    let Some(shell) = app.shell.as_mut() else {
        log::debug!("profile event without a mounted shell: {event:?}");
        return Task::none();
    };

    let overlays =
        MappedRegistrar::new(&app.dismisser, AppEvent::profile_intent);
    let ctx = ProfileCtx {
        overlays: &overlays,
        window: app.window_size,
        source: &shell.sources.profile,
        generations: &app.generations,
    };
    shell.profile.reduce(event, &ctx).map(AppEvent::Profile)
}

fn route_effect(effect: ProfileEffect) -> Task<AppEvent> {
    match effect {
        ProfileEffect::AccountRequested => Task::done(AppEvent::sidebar_intent(
            SidebarIntent::SelectItem(NavItem::Profile),
        )),
        ProfileEffect::SignOutRequested => Task::done(AppEvent::SignOut),
    }
}
