//! Layout frame: pure geometry of the shell chrome.
//!
//! Every rectangle here is derived from the sidebar snapshot and the window
//! size in one step, so content offset, top bar and overlay boundaries
//! always agree with the sidebar's current state.

use iced::{Point, Rectangle, Size};

use crate::geometry::{anchor_position, menu_height_for_items};
use crate::widgets::sidebar::{Presence, SidebarLayout, SidebarRenderMode};

pub(crate) const TOP_BAR_HEIGHT: f32 = 64.0;
pub(crate) const TOP_BAR_PADDING: f32 = 12.0;
pub(crate) const TOP_BAR_SPACING: f32 = 8.0;
pub(crate) const TRIGGER_SIZE: f32 = 40.0;
pub(crate) const PROFILE_TRIGGER_WIDTH: f32 = 184.0;
const POPUP_GAP: f32 = 4.0;

pub(crate) const MENU_ITEM_HEIGHT: f32 = 32.0;
pub(crate) const MENU_PADDING: f32 = 8.0;
const MENU_MARGIN: f32 = 6.0;

pub(crate) const PROFILE_MENU_WIDTH: f32 = 200.0;

pub(crate) const PANEL_WIDTH: f32 = 360.0;
const PANEL_MAX_HEIGHT: f32 = 480.0;
pub(crate) const PANEL_HEADER_HEIGHT: f32 = 48.0;
pub(crate) const PANEL_TABS_HEIGHT: f32 = 40.0;
pub(crate) const NOTIFICATION_ROW_HEIGHT: f32 = 72.0;
pub(crate) const ROW_PADDING: f32 = 12.0;
pub(crate) const ROW_ACTION_SIZE: f32 = 24.0;
pub(crate) const ROW_MENU_WIDTH: f32 = 168.0;

/// Geometry of the shell frame for one sidebar state and window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameGeometry {
    /// Left offset of the top bar and content area.
    pub(crate) content_offset: f32,
    pub(crate) sidebar_mode: SidebarRenderMode,
    /// Sidebar surface, absent while the sidebar is closed.
    pub(crate) sidebar: Option<Rectangle>,
    pub(crate) top_bar: Rectangle,
    pub(crate) content: Rectangle,
    /// Full-window dismissible backdrop, present only for the open overlay
    /// sidebar.
    pub(crate) backdrop: Option<Rectangle>,
    /// Background scrolling is suppressed while the overlay is open.
    pub(crate) scroll_locked: bool,
}

/// Compose the frame from the sidebar's current state.
pub(crate) fn frame(sidebar: SidebarLayout, window: Size) -> FrameGeometry {
    let width = window.width.max(0.0);
    let height = window.height.max(0.0);
    let offset = sidebar.content_offset().min(width);
    let body_height = (height - TOP_BAR_HEIGHT).max(0.0);

    let top_bar = Rectangle::new(
        Point::new(offset, 0.0),
        Size::new(width - offset, TOP_BAR_HEIGHT.min(height)),
    );
    let content = Rectangle::new(
        Point::new(offset, TOP_BAR_HEIGHT),
        Size::new(width - offset, body_height),
    );

    let overlay_open = sidebar.is_overlay_open();
    let viewport = Rectangle::new(Point::ORIGIN, Size::new(width, height));
    let surface = if sidebar.presence == Presence::Closed {
        None
    } else if overlay_open {
        Some(Rectangle::new(
            Point::new(0.0, TOP_BAR_HEIGHT),
            Size::new(sidebar.panel_width().min(width), body_height),
        ))
    } else {
        Some(Rectangle::new(Point::ORIGIN, Size::new(offset, height)))
    };

    FrameGeometry {
        content_offset: offset,
        sidebar_mode: sidebar.render_mode(),
        sidebar: surface,
        top_bar,
        content,
        backdrop: overlay_open.then_some(viewport),
        scroll_locked: overlay_open,
    }
}

/// Sidebar trigger at the leading edge of the top bar.
pub(crate) fn sidebar_trigger_rect(top_bar: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(top_bar.x + TOP_BAR_PADDING, trigger_y()),
        Size::new(TRIGGER_SIZE, TRIGGER_SIZE),
    )
}

/// Profile badge trigger at the trailing edge of the top bar.
pub(crate) fn profile_trigger_rect(window: Size) -> Rectangle {
    Rectangle::new(
        Point::new(
            window.width - TOP_BAR_PADDING - PROFILE_TRIGGER_WIDTH,
            trigger_y(),
        ),
        Size::new(PROFILE_TRIGGER_WIDTH, TRIGGER_SIZE),
    )
}

/// Notification bell, left of the profile badge.
pub(crate) fn notifications_trigger_rect(window: Size) -> Rectangle {
    let profile = profile_trigger_rect(window);
    Rectangle::new(
        Point::new(profile.x - TOP_BAR_SPACING - TRIGGER_SIZE, trigger_y()),
        Size::new(TRIGGER_SIZE, TRIGGER_SIZE),
    )
}

/// Notification panel surface, hanging from the top bar's trailing edge.
pub(crate) fn notification_panel_rect(window: Size) -> Rectangle {
    let available =
        window.height - TOP_BAR_HEIGHT - POPUP_GAP - TOP_BAR_PADDING;
    let height = available
        .min(PANEL_MAX_HEIGHT)
        .max(PANEL_HEADER_HEIGHT + PANEL_TABS_HEIGHT);
    let x = (window.width - TOP_BAR_PADDING - PANEL_WIDTH).max(TOP_BAR_PADDING);

    Rectangle::new(
        Point::new(x, TOP_BAR_HEIGHT + POPUP_GAP),
        Size::new(PANEL_WIDTH, height),
    )
}

/// Height of the scrollable notification list inside the panel.
pub(crate) fn notification_list_height(panel: Rectangle) -> f32 {
    (panel.height - PANEL_HEADER_HEIGHT - PANEL_TABS_HEIGHT).max(0.0)
}

/// Profile dropdown surface below the profile badge.
pub(crate) fn profile_menu_rect(window: Size, item_count: usize) -> Rectangle {
    let height =
        menu_height_for_items(item_count, MENU_ITEM_HEIGHT, MENU_PADDING * 2.0);
    Rectangle::new(
        Point::new(
            window.width - TOP_BAR_PADDING - PROFILE_MENU_WIDTH,
            TOP_BAR_HEIGHT + POPUP_GAP,
        ),
        Size::new(PROFILE_MENU_WIDTH, height),
    )
}

/// Action button of a notification row, relative to the panel.
pub(crate) fn row_action_rect(
    row_index: usize,
    scroll_offset: f32,
) -> Rectangle {
    let row_top = PANEL_HEADER_HEIGHT
        + PANEL_TABS_HEIGHT
        + row_index as f32 * NOTIFICATION_ROW_HEIGHT
        - scroll_offset;

    Rectangle::new(
        Point::new(
            PANEL_WIDTH - ROW_PADDING - ROW_ACTION_SIZE,
            row_top + (NOTIFICATION_ROW_HEIGHT - ROW_ACTION_SIZE) / 2.0,
        ),
        Size::new(ROW_ACTION_SIZE, ROW_ACTION_SIZE),
    )
}

/// Row action menu, relative to the panel and clamped inside it.
pub(crate) fn row_menu_rect(
    panel: Size,
    row_index: usize,
    scroll_offset: f32,
    item_count: usize,
) -> Rectangle {
    let action = row_action_rect(row_index, scroll_offset);
    let size = Size::new(
        ROW_MENU_WIDTH,
        menu_height_for_items(item_count, MENU_ITEM_HEIGHT, MENU_PADDING * 2.0),
    );
    let origin = Point::new(action.x + action.width, action.y + action.height);
    let anchor = anchor_position(origin, panel, size, MENU_MARGIN);

    Rectangle::new(anchor, size)
}

fn trigger_y() -> f32 {
    (TOP_BAR_HEIGHT - TRIGGER_SIZE) / 2.0
}
