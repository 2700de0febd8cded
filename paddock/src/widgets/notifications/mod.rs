mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{
    NotificationsEffect, NotificationsEvent, NotificationsIntent,
};
use iced::Task;
use model::{
    NotificationsViewModel, RowMenuAction, RowMenuViewModel, filter_items,
};
pub(crate) use reducer::NotificationsCtx;
use state::NotificationsState;

/// Notification panel widget owning its private state.
pub(crate) struct NotificationsWidget {
    state: NotificationsState,
}

impl NotificationsWidget {
    /// Construct a closed panel without items.
    pub(crate) fn new() -> Self {
        Self {
            state: NotificationsState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: NotificationsIntent,
        ctx: &NotificationsCtx<'_>,
    ) -> Task<NotificationsEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> NotificationsViewModel<'_> {
        let items = self.state.items();
        let row_menu = self.state.row_menu().and_then(|menu| {
            let item = items.iter().find(|item| item.id == menu.id)?;
            Some(RowMenuViewModel {
                id: menu.id.clone(),
                position: menu.rect.position(),
                actions: RowMenuAction::for_row(item.unread),
            })
        });

        NotificationsViewModel {
            is_open: self.state.is_open(),
            tab: self.state.tab(),
            items: filter_items(items, self.state.tab()),
            show_spinner: self.state.is_loading() && items.is_empty(),
            unread_count: self.state.unread_count(),
            row_menu,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[cfg(test)]
    pub(crate) fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub(crate) fn unread_count(&self) -> usize {
        self.state.unread_count()
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.state.generation()
    }
}
