use chrono::{DateTime, Duration, Utc};
use iced::Point;
use paddock_api::NotificationRecord;

/// Local copy of a notification, mutated optimistically.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notification {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) unread: bool,
}

impl From<NotificationRecord> for Notification {
    fn from(record: NotificationRecord) -> Self {
        let unread = record.is_unread();
        Self {
            id: record.id,
            title: record.title,
            description: record
                .body
                .filter(|body| !body.trim().is_empty()),
            created_at: record.created_at,
            unread,
        }
    }
}

impl Notification {
    /// Text placed on the clipboard by the row menu.
    pub(crate) fn clipboard_text(&self) -> String {
        match &self.description {
            Some(description) => format!("{}\n{description}", self.title),
            None => self.title.clone(),
        }
    }
}

/// Pure view filter over the notification list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NotificationTab {
    #[default]
    All,
    Read,
    Unread,
}

impl NotificationTab {
    pub(crate) const ALL: [NotificationTab; 3] = [
        NotificationTab::All,
        NotificationTab::Read,
        NotificationTab::Unread,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            NotificationTab::All => "All",
            NotificationTab::Read => "Read",
            NotificationTab::Unread => "Unread",
        }
    }

    pub(crate) fn admits(self, notification: &Notification) -> bool {
        match self {
            NotificationTab::All => true,
            NotificationTab::Read => !notification.unread,
            NotificationTab::Unread => notification.unread,
        }
    }
}

/// Items admitted by `tab`, in their original order.
pub(crate) fn filter_items(
    items: &[Notification],
    tab: NotificationTab,
) -> Vec<&Notification> {
    items.iter().filter(|item| tab.admits(item)).collect()
}

/// Actions offered by a row's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowMenuAction {
    MarkRead,
    CopyText,
}

impl RowMenuAction {
    pub(crate) fn label(self) -> &'static str {
        match self {
            RowMenuAction::MarkRead => "Mark as read",
            RowMenuAction::CopyText => "Copy text",
        }
    }

    /// Actions available for a row. "Mark as read" is hidden once read.
    pub(crate) fn for_row(unread: bool) -> Vec<RowMenuAction> {
        let mut actions = Vec::with_capacity(2);
        if unread {
            actions.push(RowMenuAction::MarkRead);
        }
        actions.push(RowMenuAction::CopyText);
        actions
    }
}

/// Format `created_at` relative to `now`.
pub(crate) fn relative_time(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> String {
    let elapsed = now.signed_duration_since(created_at);
    if elapsed < Duration::minutes(1) {
        String::from("just now")
    } else if elapsed < Duration::hours(1) {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed < Duration::days(7) {
        format!("{}d ago", elapsed.num_days())
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}

/// Open row menu as presented by the view, relative to the panel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RowMenuViewModel {
    pub(crate) id: String,
    pub(crate) position: Point,
    pub(crate) actions: Vec<RowMenuAction>,
}

/// View model for the notification panel.
#[derive(Debug, Clone)]
pub(crate) struct NotificationsViewModel<'a> {
    pub(crate) is_open: bool,
    pub(crate) tab: NotificationTab,
    pub(crate) items: Vec<&'a Notification>,
    /// Spinner only while loading with nothing to show.
    pub(crate) show_spinner: bool,
    pub(crate) unread_count: usize,
    pub(crate) row_menu: Option<RowMenuViewModel>,
}
