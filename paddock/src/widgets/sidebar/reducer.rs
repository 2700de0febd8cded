use iced::{Size, Task};

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;
use crate::dismiss::{Boundary, OverlayRegistrar};
use crate::layout;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx<'a> {
    pub(crate) overlays: &'a dyn OverlayRegistrar<SidebarIntent>,
    pub(crate) window: Size,
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    let task = match event {
        SidebarIntent::ViewportModeChanged(mode) => {
            state.apply_mode(mode);
            Task::none()
        },
        SidebarIntent::MidWidthChanged(mid_width) => {
            state.set_mid_width(mid_width);
            Task::none()
        },
        SidebarIntent::TriggerPressed => {
            if state.mode().is_narrow() {
                state.toggle_open();
            } else {
                state.toggle_density();
            }
            Task::none()
        },
        SidebarIntent::ToggleOpen => {
            state.toggle_open();
            Task::none()
        },
        SidebarIntent::ToggleDensity => {
            state.toggle_density();
            Task::none()
        },
        SidebarIntent::BackdropPressed | SidebarIntent::DismissOverlay => {
            state.close_overlay();
            Task::none()
        },
        SidebarIntent::SelectItem(item) => {
            state.select(item);
            state.close_overlay();
            Task::done(SidebarEvent::Effect(SidebarEffect::ItemSelected(item)))
        },
        SidebarIntent::SetNotificationBadge(count) => {
            state.set_notification_badge(count);
            Task::none()
        },
        SidebarIntent::Relayout => Task::none(),
    };

    sync_overlay(state, ctx);
    task
}

/// Keep the dismisser registration in step with overlay presence.
fn sync_overlay(state: &mut SidebarState, ctx: &SidebarCtx<'_>) {
    let sidebar = state.layout();
    if !sidebar.is_overlay_open() {
        state.set_overlay(None);
        return;
    }

    let frame = layout::frame(sidebar, ctx.window);
    let Some(surface) = frame.sidebar else {
        state.set_overlay(None);
        return;
    };
    let boundary = Boundary::new(surface)
        .with(layout::sidebar_trigger_rect(frame.top_bar));

    match state.overlay() {
        Some(handle) => handle.set_boundary(boundary),
        None => {
            let handle = ctx
                .overlays
                .register_overlay(boundary, SidebarIntent::DismissOverlay);
            state.set_overlay(Some(handle));
        },
    }
}
