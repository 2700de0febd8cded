use iced::{Event, Subscription, event, keyboard, mouse, touch, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let mut subs = vec![keyboard::listen().map(AppEvent::Keyboard)];

    // Viewport width is only observed while a component is subscribed.
    if app.observer.subscriber_count() > 0 {
        subs.push(window::events().map(|(_id, event)| AppEvent::Window(event)));
    }

    // Pointer-down outside an overlay is only tracked while one is open.
    if app.dismisser.is_listening() {
        subs.push(event::listen_with(pointer_event));
    }

    Subscription::batch(subs)
}

fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(AppEvent::PointerMoved(position))
        },
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            Some(AppEvent::PointerPressed)
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(AppEvent::TouchPressed(position))
        },
        _ => None,
    }
}
