use paddock_api::Profile;

/// Rendering state of the profile badge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ProfileStatus {
    #[default]
    Loading,
    Loaded(Profile),
    /// The fetch failed; a placeholder avatar is shown instead.
    Fallback,
}

/// Entries of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileMenuAction {
    Account,
    SignOut,
}

impl ProfileMenuAction {
    pub(crate) const ALL: [ProfileMenuAction; 2] =
        [ProfileMenuAction::Account, ProfileMenuAction::SignOut];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ProfileMenuAction::Account => "Account",
            ProfileMenuAction::SignOut => "Sign out",
        }
    }

    pub(crate) fn is_destructive(self) -> bool {
        self == ProfileMenuAction::SignOut
    }
}

/// Badge text resolved from the profile status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BadgeContent {
    pub(crate) avatar: String,
    pub(crate) name: String,
    pub(crate) caption: Option<String>,
}

impl BadgeContent {
    pub(crate) fn from_status(status: &ProfileStatus) -> Self {
        match status {
            ProfileStatus::Loading => Self {
                avatar: String::from("…"),
                name: String::from("Loading…"),
                caption: None,
            },
            ProfileStatus::Loaded(profile) => Self {
                avatar: profile.initials(),
                name: profile.display_name(),
                caption: profile
                    .role
                    .clone()
                    .or_else(|| Some(profile.email.clone()))
                    .filter(|caption| !caption.is_empty()),
            },
            ProfileStatus::Fallback => Self {
                avatar: String::from("?"),
                name: String::from("Account"),
                caption: None,
            },
        }
    }
}

/// View model for the profile badge widget.
#[derive(Debug, Clone)]
pub(crate) struct ProfileViewModel {
    pub(crate) badge: BadgeContent,
    pub(crate) menu_open: bool,
}
