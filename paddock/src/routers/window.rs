use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::widgets::notifications::NotificationsIntent;
use crate::widgets::profile::ProfileIntent;
use crate::widgets::sidebar::SidebarIntent;

/// Record a new window size and propagate it to the shell.
///
/// Breakpoint crossings are dispatched before the overlays refresh their
/// boundaries, so the boundaries are computed for the new viewport mode.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if size.width <= 0.0 || size.height <= 0.0 {
        log::debug!("ignoring degenerate window size {size:?}");
        return Task::none();
    }
    app.window_size = size;

    let crossings = app.observer.observe(size.width);
    let publish = app.dispatch(crossings);
    if app.shell.is_none() {
        return publish;
    }

    let relayout = app.dispatch([
        AppEvent::sidebar_intent(SidebarIntent::Relayout),
        AppEvent::notifications_intent(NotificationsIntent::Relayout),
        AppEvent::profile_intent(ProfileIntent::Relayout),
    ]);
    Task::batch([publish, relayout])
}
