use iced::Task;

use crate::app::{App, AppEvent};
use crate::dismiss::MappedRegistrar;
use crate::widgets::notifications::NotificationsIntent;
use crate::widgets::sidebar::{
    NavItem, SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};
use crate::widgets::top_bar::TopBarIntent;

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let Some(shell) = app.shell.as_mut() else {
        log::debug!("sidebar event without a mounted shell: {event:?}");
        return Task::none();
    };

    let overlays =
        MappedRegistrar::new(&app.dismisser, AppEvent::sidebar_intent);
    let ctx = SidebarCtx {
        overlays: &overlays,
        window: app.window_size,
    };
    shell.sidebar.reduce(event, &ctx).map(AppEvent::Sidebar)
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::ItemSelected(item) => {
            let title = Task::done(AppEvent::top_bar_intent(
                TopBarIntent::SetTitle(String::from(item.label())),
            ));
            if item == NavItem::Notifications {
                Task::batch([
                    title,
                    Task::done(AppEvent::notifications_intent(
                        NotificationsIntent::Open,
                    )),
                ])
            } else {
                title
            }
        },
    }
}
