use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::notifications::NotificationsIntent;
use crate::widgets::sidebar::SidebarIntent;
use crate::widgets::top_bar::{TopBarEffect, TopBarEvent, TopBarIntent};

/// Route a top bar event through reduction or orchestration.
pub(crate) fn route(app: &mut App, event: TopBarEvent) -> Task<AppEvent> {
    match event {
        TopBarEvent::Intent(event) => route_intent(app, event),
        TopBarEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: TopBarIntent) -> Task<AppEvent> {
    let Some(shell) = app.shell.as_mut() else {
        log::debug!("top bar event without a mounted shell: {event:?}");
        return Task::none();
    };

    shell.top_bar.reduce(event).map(AppEvent::TopBar)
}

fn route_effect(effect: TopBarEffect) -> Task<AppEvent> {
    match effect {
        TopBarEffect::ToggleSidebar => {
            Task::done(AppEvent::sidebar_intent(SidebarIntent::TriggerPressed))
        },
        TopBarEffect::ToggleNotifications => Task::done(
            AppEvent::notifications_intent(NotificationsIntent::TogglePanel),
        ),
    }
}
