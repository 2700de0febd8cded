use paddock_api::Profile;

use super::model::ProfileMenuAction;

/// Intent events handled by the profile badge.
#[derive(Debug, Clone)]
pub(crate) enum ProfileIntent {
    /// Start a new profile fetch.
    Fetch,
    /// Completion of the fetch started with `generation`.
    Fetched {
        generation: u64,
        result: Result<Profile, String>,
    },
    /// Badge trigger pressed.
    ToggleMenu,
    /// Outside-interaction dismissal of the dropdown.
    DismissMenu,
    MenuAction(ProfileMenuAction),
    DismissAll,
    /// The window was resized; refresh the dropdown boundary.
    Relayout,
}

/// Effect events produced by the profile badge reducer.
#[derive(Debug, Clone)]
pub(crate) enum ProfileEffect {
    AccountRequested,
    SignOutRequested,
}

/// Profile badge event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ProfileEvent {
    /// Intent event reduced by the profile widget.
    Intent(ProfileIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ProfileEffect),
}
