use iced::Task;

use super::event::{TopBarEffect, TopBarEvent, TopBarIntent};
use super::state::TopBarState;

/// Reduce a top bar intent into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut TopBarState,
    event: TopBarIntent,
) -> Task<TopBarEvent> {
    match event {
        TopBarIntent::SidebarTriggerPressed => {
            Task::done(TopBarEvent::Effect(TopBarEffect::ToggleSidebar))
        },
        TopBarIntent::NotificationsTriggerPressed => {
            Task::done(TopBarEvent::Effect(TopBarEffect::ToggleNotifications))
        },
        TopBarIntent::SetTitle(title) => {
            state.set_title(title);
            Task::none()
        },
        TopBarIntent::SetUnreadCount(count) => {
            state.set_unread_count(count);
            Task::none()
        },
    }
}
