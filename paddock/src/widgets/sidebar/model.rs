use crate::breakpoint::ViewportMode;

pub(crate) const SIDEBAR_MINIMIZED_WIDTH: f32 = 72.0;
pub(crate) const SIDEBAR_EXPANDED_WIDTH: f32 = 260.0;

/// Whether the sidebar is shown at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Open,
    Closed,
}

/// Width mode of the inline sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Density {
    #[default]
    Expanded,
    Minimized,
}

impl Density {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Minimized,
            Self::Minimized => Self::Expanded,
        }
    }
}

/// How the sidebar is composed with the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarRenderMode {
    /// Reserves horizontal space next to the content.
    Inline,
    /// Floats above the content behind a dismissible backdrop.
    Overlay,
}

/// Navigation destinations listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NavItem {
    #[default]
    Dashboard,
    Notifications,
    Profile,
    Settings,
}

impl NavItem {
    pub(crate) const ALL: [NavItem; 4] = [
        NavItem::Dashboard,
        NavItem::Notifications,
        NavItem::Profile,
        NavItem::Settings,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Notifications => "Notifications",
            NavItem::Profile => "Profile",
            NavItem::Settings => "Settings",
        }
    }

    pub(crate) fn glyph(self) -> &'static str {
        match self {
            NavItem::Dashboard => "▦",
            NavItem::Notifications => "◔",
            NavItem::Profile => "◉",
            NavItem::Settings => "⚙",
        }
    }
}

/// Snapshot of the sidebar state consumed by the layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarLayout {
    pub(crate) mode: ViewportMode,
    pub(crate) presence: Presence,
    pub(crate) density: Density,
}

impl SidebarLayout {
    pub(crate) fn render_mode(self) -> SidebarRenderMode {
        if self.mode.is_narrow() {
            SidebarRenderMode::Overlay
        } else {
            SidebarRenderMode::Inline
        }
    }

    /// Horizontal space reserved for the sidebar next to the content.
    pub(crate) fn content_offset(self) -> f32 {
        match (self.presence, self.render_mode()) {
            (Presence::Closed, _) | (_, SidebarRenderMode::Overlay) => 0.0,
            (Presence::Open, SidebarRenderMode::Inline) => {
                density_width(self.density)
            },
        }
    }

    /// Width of the sidebar surface while it is shown.
    pub(crate) fn panel_width(self) -> f32 {
        match self.render_mode() {
            SidebarRenderMode::Inline => density_width(self.density),
            SidebarRenderMode::Overlay => SIDEBAR_EXPANDED_WIDTH,
        }
    }

    pub(crate) fn is_overlay_open(self) -> bool {
        self.presence == Presence::Open
            && self.render_mode() == SidebarRenderMode::Overlay
    }
}

fn density_width(density: Density) -> f32 {
    match density {
        Density::Expanded => SIDEBAR_EXPANDED_WIDTH,
        Density::Minimized => SIDEBAR_MINIMIZED_WIDTH,
    }
}

/// View model for the sidebar widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel {
    pub(crate) layout: SidebarLayout,
    pub(crate) active_item: NavItem,
    pub(crate) mid_width: bool,
    pub(crate) notification_badge: usize,
}

impl SidebarViewModel {
    /// Labels are shown whenever the surface is wide enough for them.
    pub(crate) fn shows_labels(&self) -> bool {
        self.layout.panel_width() >= SIDEBAR_EXPANDED_WIDTH
    }

    /// Section captions and item badges are dropped on tight wide layouts.
    pub(crate) fn shows_captions(&self) -> bool {
        self.shows_labels() && !self.mid_width
    }
}
