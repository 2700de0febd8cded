use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::client::ApiClient;
use crate::errors::ApiError;

const NOTIFICATIONS_PATH: &str = "/notifications";

/// Delivery channel whose read receipt decides the unread flag.
pub const IN_APP_CHANNEL: &str = "inapp";

/// Notification as stored by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
}

/// Per-channel delivery receipt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub channel: String,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

impl NotificationRecord {
    /// A record is unread until its in-app delivery carries a read receipt.
    pub fn is_unread(&self) -> bool {
        !self.deliveries.iter().any(|delivery| {
            delivery.channel == IN_APP_CHANNEL && delivery.read_at.is_some()
        })
    }
}

/// List payloads come either bare or wrapped in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListPayload {
    Bare(Vec<NotificationRecord>),
    Wrapped {
        #[serde(alias = "data", alias = "items")]
        notifications: Vec<NotificationRecord>,
    },
}

impl ListPayload {
    fn into_records(self) -> Vec<NotificationRecord> {
        match self {
            ListPayload::Bare(records) => records,
            ListPayload::Wrapped { notifications } => notifications,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}

/// Authoritative store of notifications.
#[async_trait]
pub trait NotificationSource: Send + Sync {
    /// List notifications in arrival order.
    async fn list(&self) -> Result<Vec<NotificationRecord>, ApiError>;

    /// Record an in-app read receipt for one notification.
    async fn mark_read(&self, id: &str) -> Result<(), ApiError>;
}

/// Notification source backed by `GET /notifications` and
/// `POST /notifications/{id}/read`.
#[derive(Clone)]
pub struct HttpNotificationSource {
    client: ApiClient,
}

impl HttpNotificationSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationSource for HttpNotificationSource {
    async fn list(&self) -> Result<Vec<NotificationRecord>, ApiError> {
        let payload: ListPayload =
            self.client.get_json(NOTIFICATIONS_PATH).await?;
        Ok(payload.into_records())
    }

    async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{NOTIFICATIONS_PATH}/{id}/read");
        self.client.post_empty(&path).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ListPayload, NotificationRecord};

    fn record(value: serde_json::Value) -> NotificationRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn given_no_inapp_receipt_when_checked_then_record_is_unread() {
        let item = record(json!({
            "id": "n1",
            "title": "Deploy finished",
            "createdAt": "2026-10-01T10:00:00Z",
            "deliveries": [
                {"channel": "email", "readAt": "2026-10-01T10:05:00Z"},
                {"channel": "inapp", "readAt": null}
            ]
        }));
        assert!(item.is_unread());
    }

    #[test]
    fn given_inapp_receipt_when_checked_then_record_is_read() {
        let item = record(json!({
            "id": 42,
            "title": "Invoice paid",
            "body": "Invoice #17 was settled.",
            "createdAt": "2026-10-01T10:00:00Z",
            "deliveries": [{"channel": "inapp", "readAt": "2026-10-02T08:00:00Z"}]
        }));
        assert!(!item.is_unread());
        assert_eq!(item.id, "42");
        assert_eq!(item.body.as_deref(), Some("Invoice #17 was settled."));
    }

    #[test]
    fn given_missing_deliveries_when_checked_then_record_is_unread() {
        let item = record(json!({
            "id": "n2",
            "title": "Welcome",
            "createdAt": "2026-10-01T10:00:00Z"
        }));
        assert!(item.is_unread());
    }

    #[test]
    fn given_bare_and_wrapped_lists_when_parsed_then_order_is_preserved() {
        let items = json!([
            {"id": "b", "title": "B", "createdAt": "2026-10-01T10:00:00Z"},
            {"id": "a", "title": "A", "createdAt": "2026-10-01T09:00:00Z"}
        ]);
        let bare: ListPayload =
            serde_json::from_value(items.clone()).expect("bare list");
        let wrapped: ListPayload =
            serde_json::from_value(json!({"notifications": items}))
                .expect("wrapped list");

        let bare_ids: Vec<String> =
            bare.into_records().into_iter().map(|r| r.id).collect();
        let wrapped_ids: Vec<String> =
            wrapped.into_records().into_iter().map(|r| r.id).collect();

        assert_eq!(bare_ids, vec!["b", "a"]);
        assert_eq!(bare_ids, wrapped_ids);
    }
}
