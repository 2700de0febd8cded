use iced::keyboard::{self, key};

use crate::app::AppEvent;

/// Determines how the event loop should treat an incoming event while at
/// least one overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event.
    Ignore,
    /// Close every open overlay instead of dispatching.
    DismissAll,
}

/// Classify an incoming event when at least one overlay is open.
pub(crate) fn overlay_guard(event: &AppEvent) -> OverlayGuard {
    use OverlayGuard::*;

    match event {
        AppEvent::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => DismissAll,
        AppEvent::Keyboard(_) => Ignore,
        _ => Allow,
    }
}
