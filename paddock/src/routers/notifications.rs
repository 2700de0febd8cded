use iced::Task;

use crate::app::{App, AppEvent};
use crate::dismiss::MappedRegistrar;
use crate::widgets::notifications::{
    NotificationsCtx, NotificationsEffect, NotificationsEvent,
    NotificationsIntent,
};
use crate::widgets::sidebar::SidebarIntent;
use crate::widgets::top_bar::TopBarIntent;

/// Route a notification panel event through reduction or orchestration.
pub(crate) fn route(
    app: &mut App,
    event: NotificationsEvent,
) -> Task<AppEvent> {
    match event {
        NotificationsEvent::Intent(event) => route_intent(app, event),
        NotificationsEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: NotificationsIntent) -> Task<AppEvent> {
    let Some(shell) = app.shell.as_mut() else {
        log::debug!("notifications event without a mounted shell: {event:?}");
        return Task::none();
    };

    let overlays =
        MappedRegistrar::new(&app.dismisser, AppEvent::notifications_intent);
    let ctx = NotificationsCtx {
        overlays: &overlays,
        window: app.window_size,
        source: &shell.sources.notifications,
        generations: &app.generations,
    };
    shell
        .notifications
        .reduce(event, &ctx)
        .map(AppEvent::Notifications)
}

fn route_effect(effect: NotificationsEffect) -> Task<AppEvent> {
    match effect {
        NotificationsEffect::UnreadCountChanged(count) => Task::batch([
            Task::done(AppEvent::sidebar_intent(
                SidebarIntent::SetNotificationBadge(count),
            )),
            Task::done(AppEvent::top_bar_intent(
                TopBarIntent::SetUnreadCount(count),
            )),
        ]),
    }
}
