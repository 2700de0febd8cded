use super::model::NavItem;
use crate::breakpoint::ViewportMode;

/// Intent events handled by the sidebar state machine.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Compact-mode publication from the shell breakpoint observer.
    ViewportModeChanged(ViewportMode),
    /// Mid-width publication from the sidebar's own observer.
    MidWidthChanged(bool),
    /// Top bar trigger: toggles presence in Narrow, density in Wide.
    TriggerPressed,
    ToggleOpen,
    ToggleDensity,
    BackdropPressed,
    /// Outside-interaction dismissal of the overlay sidebar.
    DismissOverlay,
    SelectItem(NavItem),
    SetNotificationBadge(usize),
    /// The window was resized; refresh the overlay boundary.
    Relayout,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    ItemSelected(NavItem),
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
