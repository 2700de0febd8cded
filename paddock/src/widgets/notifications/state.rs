use std::collections::HashSet;

use iced::Rectangle;

use super::model::{Notification, NotificationTab};
use crate::dismiss::OverlayHandle;

/// Open row action menu and its dismisser registration.
#[derive(Debug)]
pub(super) struct RowMenuState {
    pub(super) id: String,
    /// Menu surface relative to the panel.
    pub(super) rect: Rectangle,
    pub(super) handle: OverlayHandle,
}

/// Internal runtime state of the notification panel.
#[derive(Debug, Default)]
pub(super) struct NotificationsState {
    open: bool,
    tab: NotificationTab,
    items: Vec<Notification>,
    loading: bool,
    generation: u64,
    /// Ids flipped to read locally. Fetch results never turn them unread.
    read_locally: HashSet<String>,
    scroll_offset: f32,
    panel_overlay: Option<OverlayHandle>,
    row_menu: Option<RowMenuState>,
}

impl NotificationsState {
    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn tab(&self) -> NotificationTab {
        self.tab
    }

    pub(super) fn items(&self) -> &[Notification] {
        &self.items
    }

    pub(super) fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub(super) fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| item.unread).count()
    }

    pub(super) fn row_menu(&self) -> Option<&RowMenuState> {
        self.row_menu.as_ref()
    }

    pub(super) fn row_menu_mut(&mut self) -> Option<&mut RowMenuState> {
        self.row_menu.as_mut()
    }

    pub(super) fn panel_overlay(&self) -> Option<&OverlayHandle> {
        self.panel_overlay.as_ref()
    }

    /// Open the panel and stamp its fetch with `generation`.
    ///
    /// Existing items stay visible while the fetch runs.
    pub(super) fn open(&mut self, generation: u64) {
        self.open = true;
        self.loading = true;
        self.generation = generation;
    }

    /// Close the panel and its row menu. Items are kept warm.
    pub(super) fn close(&mut self) {
        self.open = false;
        self.loading = false;
        self.scroll_offset = 0.0;
        self.row_menu = None;
        self.panel_overlay = None;
    }

    /// Return whether a fetch completion still belongs to the open panel.
    pub(super) fn is_current(&self, generation: u64) -> bool {
        self.open && generation == self.generation
    }

    /// Replace the items with a fetch result. Failures leave no items.
    ///
    /// Items marked read locally stay read even when the source still
    /// reports them unread.
    pub(super) fn apply_loaded(
        &mut self,
        result: Result<Vec<Notification>, String>,
    ) {
        self.loading = false;
        self.items = result.unwrap_or_default();
        for item in &mut self.items {
            if self.read_locally.contains(&item.id) {
                item.unread = false;
            }
        }
        self.row_menu = None;
    }

    pub(super) fn set_tab(&mut self, tab: NotificationTab) {
        if self.tab != tab {
            self.tab = tab;
            self.scroll_offset = 0.0;
            self.row_menu = None;
        }
    }

    /// Flip one item to read. Returns whether it was unread.
    pub(super) fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.unread => {
                item.unread = false;
                self.read_locally.insert(item.id.clone());
                true
            },
            _ => false,
        }
    }

    /// Flip every item to read. Returns the ids that were unread.
    pub(super) fn mark_all_read(&mut self) -> Vec<String> {
        let ids: Vec<String> = self
            .items
            .iter_mut()
            .filter(|item| item.unread)
            .map(|item| {
                item.unread = false;
                item.id.clone()
            })
            .collect();
        self.read_locally.extend(ids.iter().cloned());
        ids
    }

    pub(super) fn set_scroll_offset(&mut self, offset_y: f32) {
        self.scroll_offset = offset_y.max(0.0);
    }

    pub(super) fn set_row_menu(&mut self, row_menu: Option<RowMenuState>) {
        self.row_menu = row_menu;
    }

    pub(super) fn set_panel_overlay(&mut self, overlay: Option<OverlayHandle>) {
        self.panel_overlay = overlay;
    }
}
