use iced::{Task, window};

use super::{App, AppEvent};
use crate::guards::{OverlayGuard, overlay_guard};
use crate::routers;
use crate::widgets::notifications::NotificationsIntent;
use crate::widgets::profile::ProfileIntent;
use crate::widgets::sidebar::SidebarIntent;

/// Apply the overlay guard, then route the event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if app.dismisser.is_listening() {
        match overlay_guard(&event) {
            OverlayGuard::Allow => {},
            OverlayGuard::Ignore => return Task::none(),
            OverlayGuard::DismissAll => return dismiss_all(app),
        }
    }

    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Widgets
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Notifications(event) => {
            routers::notifications::route(app, event)
        },
        AppEvent::Profile(event) => routers::profile::route(app, event),
        AppEvent::TopBar(event) => routers::top_bar::route(app, event),
        // Session
        AppEvent::SignIn => routers::session::sign_in(app),
        AppEvent::SignOut => routers::session::sign_out(app),
        // Outside-interaction listener
        AppEvent::PointerMoved(position) => {
            routers::pointer::handle_moved(app, position)
        },
        AppEvent::PointerPressed => routers::pointer::handle_pressed(app),
        AppEvent::TouchPressed(position) => {
            routers::pointer::handle_touch(app, position)
        },
        // Direct operations
        AppEvent::Keyboard(_event) => Task::none(),
        AppEvent::Window(window::Event::Resized(size))
        | AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::WindowSized(size) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}

fn dismiss_all(app: &mut App) -> Task<AppEvent> {
    app.dispatch([
        AppEvent::sidebar_intent(SidebarIntent::DismissOverlay),
        AppEvent::notifications_intent(NotificationsIntent::DismissAll),
        AppEvent::profile_intent(ProfileIntent::DismissAll),
    ])
}
