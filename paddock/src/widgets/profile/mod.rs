mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{ProfileEffect, ProfileEvent, ProfileIntent};
use iced::Task;
pub(crate) use model::ProfileMenuAction;
#[cfg(test)]
use model::ProfileStatus;
use model::{BadgeContent, ProfileViewModel};
pub(crate) use reducer::ProfileCtx;
use state::ProfileState;

/// Profile badge widget owning its fetch state and dropdown registration.
pub(crate) struct ProfileWidget {
    state: ProfileState,
}

impl ProfileWidget {
    /// Mount the badge and start the first profile fetch.
    pub(crate) fn mount(ctx: &ProfileCtx<'_>) -> (Self, Task<ProfileEvent>) {
        let mut widget = Self {
            state: ProfileState::default(),
        };
        let task = widget.reduce(ProfileIntent::Fetch, ctx);
        (widget, task)
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ProfileIntent,
        ctx: &ProfileCtx<'_>,
    ) -> Task<ProfileEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> ProfileViewModel {
        ProfileViewModel {
            badge: BadgeContent::from_status(self.state.status()),
            menu_open: self.state.is_menu_open(),
        }
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> &ProfileStatus {
        self.state.status()
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.state.generation()
    }
}
