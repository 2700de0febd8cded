use paddock_api::Profile;

use super::model::ProfileStatus;
use crate::dismiss::OverlayHandle;

/// Internal runtime state of the profile badge.
#[derive(Debug, Default)]
pub(super) struct ProfileState {
    status: ProfileStatus,
    generation: u64,
    menu: Option<OverlayHandle>,
}

impl ProfileState {
    pub(super) fn status(&self) -> &ProfileStatus {
        &self.status
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn menu(&self) -> Option<&OverlayHandle> {
        self.menu.as_ref()
    }

    pub(super) fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Enter the loading state for the fetch stamped `generation`.
    pub(super) fn begin_fetch(&mut self, generation: u64) {
        self.status = ProfileStatus::Loading;
        self.generation = generation;
    }

    /// Settle on a fetch result. Any failure renders the fallback badge.
    pub(super) fn apply_fetched(&mut self, result: Result<Profile, String>) {
        self.status = match result {
            Ok(profile) => ProfileStatus::Loaded(profile),
            Err(_) => ProfileStatus::Fallback,
        };
    }

    pub(super) fn set_menu(&mut self, menu: Option<OverlayHandle>) {
        self.menu = menu;
    }
}
