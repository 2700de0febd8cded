/// Intent events handled by the top bar widget.
#[derive(Debug, Clone)]
pub(crate) enum TopBarIntent {
    SidebarTriggerPressed,
    NotificationsTriggerPressed,
    SetTitle(String),
    SetUnreadCount(usize),
}

/// Effect events produced by the top bar reducer.
#[derive(Debug, Clone)]
pub(crate) enum TopBarEffect {
    ToggleSidebar,
    ToggleNotifications,
}

/// Top bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TopBarEvent {
    /// Intent event reduced by the top bar widget.
    Intent(TopBarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(TopBarEffect),
}
