use iced::Task;
use paddock_api::SessionProvider;

use crate::app::{App, AppEvent, Shell};

/// Mount the shell widgets when a session and data sources are present.
pub(crate) fn mount_shell(app: &mut App) -> Task<AppEvent> {
    if app.shell.is_some() || !app.session.is_present() {
        return Task::none();
    }
    let Some(sources) = app.sources.clone() else {
        log::warn!("session present but the backend client is unavailable");
        return Task::none();
    };

    let (shell, task) = Shell::mount(
        &app.observer,
        &app.dismisser,
        &app.generations,
        app.window_size,
        sources,
    );
    app.shell = Some(shell);
    log::info!("shell mounted");
    task
}

/// Begin a session from the configured credential and mount the shell.
pub(crate) fn sign_in(app: &mut App) -> Task<AppEvent> {
    if !app.begin_session() {
        log::warn!("sign-in requested without a configured API token");
        return Task::none();
    }
    mount_shell(app)
}

/// End the session and unmount every session-scoped widget.
///
/// Dropping the shell releases its overlay registrations and breakpoint
/// subscriptions, so pointer and window listening stop with it.
pub(crate) fn sign_out(app: &mut App) -> Task<AppEvent> {
    app.session.end();
    if app.shell.take().is_some() {
        log::info!("signed out; shell unmounted");
    }
    Task::none()
}
