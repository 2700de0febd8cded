mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{TopBarEffect, TopBarEvent, TopBarIntent};
use self::model::TopBarViewModel;
use self::state::TopBarState;

/// Top bar widget holding the page title and the sidebar and bell triggers.
pub(crate) struct TopBarWidget {
    state: TopBarState,
}

impl TopBarWidget {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            state: TopBarState::new(title),
        }
    }

    /// Reduce a top bar intent event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: TopBarIntent) -> Task<TopBarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Produce the top bar view model for rendering.
    pub(crate) fn vm(&self) -> TopBarViewModel<'_> {
        TopBarViewModel {
            title: self.state.title(),
            unread_count: self.state.unread_count(),
        }
    }
}
