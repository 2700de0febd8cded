use super::model::{Density, NavItem, Presence, SidebarLayout};
use crate::breakpoint::ViewportMode;
use crate::dismiss::OverlayHandle;

/// Internal runtime state of the sidebar state machine.
#[derive(Debug)]
pub(super) struct SidebarState {
    mode: ViewportMode,
    presence: Presence,
    density: Density,
    mid_width: bool,
    active_item: NavItem,
    notification_badge: usize,
    overlay: Option<OverlayHandle>,
}

impl SidebarState {
    /// Initialize from the viewport mode at mount time.
    pub(super) fn new(mode: ViewportMode) -> Self {
        Self {
            mode,
            presence: default_presence(mode),
            density: Density::default(),
            mid_width: false,
            active_item: NavItem::default(),
            notification_badge: 0,
            overlay: None,
        }
    }

    pub(super) fn layout(&self) -> SidebarLayout {
        SidebarLayout {
            mode: self.mode,
            presence: self.presence,
            density: self.density,
        }
    }

    pub(super) fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub(super) fn mid_width(&self) -> bool {
        self.mid_width
    }

    pub(super) fn active_item(&self) -> NavItem {
        self.active_item
    }

    pub(super) fn notification_badge(&self) -> usize {
        self.notification_badge
    }

    pub(super) fn overlay(&self) -> Option<&OverlayHandle> {
        self.overlay.as_ref()
    }

    /// Force the presence that belongs to `mode`. Density survives.
    pub(super) fn apply_mode(&mut self, mode: ViewportMode) {
        self.mode = mode;
        self.presence = default_presence(mode);
    }

    pub(super) fn set_mid_width(&mut self, mid_width: bool) {
        self.mid_width = mid_width;
    }

    /// Flip presence. Only meaningful while the sidebar is an overlay.
    pub(super) fn toggle_open(&mut self) -> bool {
        if !self.mode.is_narrow() {
            return false;
        }
        self.presence = match self.presence {
            Presence::Open => Presence::Closed,
            Presence::Closed => Presence::Open,
        };
        true
    }

    /// Flip density. Only meaningful while the sidebar is inline.
    pub(super) fn toggle_density(&mut self) -> bool {
        if self.mode.is_narrow() {
            return false;
        }
        self.density = self.density.toggled();
        true
    }

    /// Close the overlay sidebar. The inline sidebar cannot be dismissed.
    pub(super) fn close_overlay(&mut self) -> bool {
        if !self.mode.is_narrow() || self.presence == Presence::Closed {
            return false;
        }
        self.presence = Presence::Closed;
        true
    }

    pub(super) fn select(&mut self, item: NavItem) {
        self.active_item = item;
    }

    pub(super) fn set_notification_badge(&mut self, count: usize) {
        self.notification_badge = count;
    }

    pub(super) fn set_overlay(&mut self, overlay: Option<OverlayHandle>) {
        self.overlay = overlay;
    }
}

fn default_presence(mode: ViewportMode) -> Presence {
    if mode.is_narrow() {
        Presence::Closed
    } else {
        Presence::Open
    }
}
