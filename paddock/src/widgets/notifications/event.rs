use super::model::{Notification, NotificationTab, RowMenuAction};

/// Intent events handled by the notification panel.
#[derive(Debug, Clone)]
pub(crate) enum NotificationsIntent {
    /// Bell trigger pressed.
    TogglePanel,
    Open,
    Close,
    /// Outside-interaction dismissal of the panel.
    DismissPanel,
    SetTab(NotificationTab),
    /// Completion of the fetch started by the open with `generation`.
    Loaded {
        generation: u64,
        result: Result<Vec<Notification>, String>,
    },
    MarkRead {
        id: String,
    },
    MarkAllRead,
    /// Completion of a best-effort mark-read call.
    MarkReadFinished {
        id: String,
        result: Result<(), String>,
    },
    /// Row action button pressed: open its menu, or close it if open.
    ToggleRowMenu {
        id: String,
    },
    /// Outside-interaction dismissal of the row menu opened for `id`.
    DismissRowMenu {
        id: String,
    },
    RowMenuAction {
        id: String,
        action: RowMenuAction,
    },
    ListScrolled {
        offset_y: f32,
    },
    /// Close every open overlay of the panel at once.
    DismissAll,
    /// The window was resized; refresh the overlay boundaries.
    Relayout,
}

/// Effect events produced by the notification panel reducer.
#[derive(Debug, Clone)]
pub(crate) enum NotificationsEffect {
    /// The number of unread local items changed.
    UnreadCountChanged(usize),
}

/// Notification panel event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NotificationsEvent {
    /// Intent event reduced by the notification panel.
    Intent(NotificationsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NotificationsEffect),
}
