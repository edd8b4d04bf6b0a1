//! In-app notification models (per-user push/inbox notifications)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Message,
    RoomInquiry,
    RoomUpdate,
    System,
    #[serde(other)]
    Unknown,
}

impl NotificationType {
    pub fn all() -> [NotificationType; 4] {
        [
            NotificationType::Message,
            NotificationType::RoomInquiry,
            NotificationType::RoomUpdate,
            NotificationType::System,
        ]
    }

    /// Wire value, also used as the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Message => "message",
            NotificationType::RoomInquiry => "room_inquiry",
            NotificationType::RoomUpdate => "room_update",
            NotificationType::System => "system",
            NotificationType::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::Message => "Message",
            NotificationType::RoomInquiry => "Room Inquiry",
            NotificationType::RoomUpdate => "Room Update",
            NotificationType::System => "System",
            NotificationType::Unknown => "Unknown",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub receiver_id: String,
    pub title: String,
    pub body: String,
    pub data: NotificationData,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /notifications`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub receiver_id: String,
    pub title: String,
    pub body: String,
    pub data: NotificationData,
}

/// Partial update body for `PATCH /notifications/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

/// Query filters for `GET /notifications`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `PATCH /notifications/user/{id}/read-all`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MarkAllReadResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_wire_names() {
        let data: NotificationData =
            serde_json::from_str(r#"{"type":"room_inquiry","senderId":"u2"}"#).unwrap();
        assert_eq!(data.kind, NotificationType::RoomInquiry);
        assert_eq!(data.sender_id.as_deref(), Some("u2"));

        let filters = NotificationFilters {
            kind: Some(NotificationType::System.as_str().to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(value, serde_json::json!({"type": "system"}));
    }
}
