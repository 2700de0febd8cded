use iced::{Point, Task};

use crate::app::{App, AppEvent};

/// Track the cursor for later outside-press evaluation.
pub(crate) fn handle_moved(app: &mut App, position: Point) -> Task<AppEvent> {
    app.dismisser.pointer_moved(position);
    Task::none()
}

/// Dismiss every overlay whose boundary excludes the last cursor position.
pub(crate) fn handle_pressed(app: &mut App) -> Task<AppEvent> {
    let dismissals = app.dismisser.pointer_pressed();
    app.dispatch(dismissals)
}

/// Dismiss every overlay whose boundary excludes a touch point.
pub(crate) fn handle_touch(app: &mut App, position: Point) -> Task<AppEvent> {
    let dismissals = app.dismisser.pointer_pressed_at(position);
    app.dispatch(dismissals)
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::{handle_moved, handle_pressed};
    use crate::app::{App, AppEvent};
    use crate::config::ShellConfig;
    use crate::layout;
    use crate::widgets::notifications::{
        NotificationsEvent, NotificationsIntent,
    };
    use crate::widgets::profile::ProfileIntent;

    fn signed_in_app() -> App {
        let config = ShellConfig {
            token: Some(SecretString::from(String::from("token"))),
            ..ShellConfig::default()
        };
        let (app, _task) = App::new(config);
        assert!(app.shell.is_some());
        app
    }

    #[test]
    fn given_open_panel_when_pressing_profile_trigger_then_panel_closes_and_menu_opens()
     {
        let mut app = signed_in_app();
        let _task = app.update(AppEvent::notifications_intent(
            NotificationsIntent::TogglePanel,
        ));
        let badge = layout::profile_trigger_rect(app.window_size).center();

        let fired = app.dismisser.pointer_pressed_at(badge);
        assert!(matches!(
            fired.as_slice(),
            [AppEvent::Notifications(NotificationsEvent::Intent(
                NotificationsIntent::DismissPanel
            ))]
        ));

        let _task = handle_moved(&mut app, badge);
        let _task = handle_pressed(&mut app);
        // The badge button fires on release, after the press was evaluated.
        let _task = app.update(AppEvent::profile_intent(ProfileIntent::ToggleMenu));

        let Some(shell) = app.shell.as_ref() else {
            panic!("shell should stay mounted");
        };
        assert!(!shell.notifications.is_open());
        assert!(shell.profile.vm().menu_open);
        assert_eq!(app.dismisser.registration_count(), 1);
    }

    #[test]
    fn given_open_menu_when_pressing_bell_then_menu_closes_and_panel_opens() {
        let mut app = signed_in_app();
        let _task = app.update(AppEvent::profile_intent(ProfileIntent::ToggleMenu));
        let bell = layout::notifications_trigger_rect(app.window_size).center();

        let _task = handle_moved(&mut app, bell);
        let _task = handle_pressed(&mut app);
        let _task = app.update(AppEvent::notifications_intent(
            NotificationsIntent::TogglePanel,
        ));

        let Some(shell) = app.shell.as_ref() else {
            panic!("shell should stay mounted");
        };
        assert!(!shell.profile.vm().menu_open);
        assert!(shell.notifications.is_open());
        assert_eq!(app.dismisser.registration_count(), 1);
    }
}
