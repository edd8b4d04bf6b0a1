//! Moderation models: abuse reports, support tickets and broadcast notices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportType {
    User,
    Room,
    Item,
    Message,
    #[serde(other)]
    Unknown,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::User => "User",
            ReportType::Room => "Room",
            ReportType::Item => "Item",
            ReportType::Message => "Message",
            ReportType::Unknown => "Unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ReportType::User => "badge badge-purple",
            ReportType::Room => "badge badge-teal",
            ReportType::Item => "badge badge-orange",
            ReportType::Message => "badge badge-pink",
            ReportType::Unknown => "badge",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    Reviewed,
    ActionTaken,
    Dismissed,
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    pub fn all() -> [ReportStatus; 4] {
        [
            ReportStatus::Pending,
            ReportStatus::Reviewed,
            ReportStatus::ActionTaken,
            ReportStatus::Dismissed,
        ]
    }

    /// Wire value, used as `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Reviewed => "Reviewed",
            ReportStatus::ActionTaken => "ActionTaken",
            ReportStatus::Dismissed => "Dismissed",
            ReportStatus::Unknown => "Unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::ActionTaken => "Action Taken",
            other => other.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<ReportStatus> {
        ReportStatus::all().into_iter().find(|s| s.as_str() == value)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "badge badge-warning",
            ReportStatus::Reviewed => "badge badge-info",
            ReportStatus::ActionTaken => "badge badge-danger",
            ReportStatus::Dismissed | ReportStatus::Unknown => "badge",
        }
    }
}

/// A user-filed abuse report
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub reason: String,
    #[serde(default)]
    pub description: String,
    pub reporter_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Report {
    /// `InappropriateContent` -> `Inappropriate Content`
    pub fn reason_label(&self) -> String {
        split_pascal_case(&self.reason)
    }

    pub fn target_label(&self) -> &str {
        self.target_name.as_deref().filter(|name| !name.is_empty()).unwrap_or("Unknown")
    }

    pub fn reporter_label(&self) -> &str {
        self.reporter_name.as_deref().filter(|name| !name.is_empty()).unwrap_or("Unknown")
    }
}

/// Body for `PATCH /reports/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    pub status: ReportStatus,
    pub admin_notes: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportTicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl SupportTicketStatus {
    pub fn all() -> [SupportTicketStatus; 4] {
        [
            SupportTicketStatus::Open,
            SupportTicketStatus::InProgress,
            SupportTicketStatus::Resolved,
            SupportTicketStatus::Closed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportTicketStatus::Open => "Open",
            SupportTicketStatus::InProgress => "InProgress",
            SupportTicketStatus::Resolved => "Resolved",
            SupportTicketStatus::Closed => "Closed",
            SupportTicketStatus::Unknown => "Unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupportTicketStatus::InProgress => "In Progress",
            other => other.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<SupportTicketStatus> {
        SupportTicketStatus::all().into_iter().find(|s| s.as_str() == value)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SupportTicketStatus::Open => "badge badge-info",
            SupportTicketStatus::InProgress => "badge badge-warning",
            SupportTicketStatus::Resolved => "badge badge-success",
            SupportTicketStatus::Closed | SupportTicketStatus::Unknown => "badge",
        }
    }
}

/// A support request raised from the mobile app
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    /// Free-form PascalCase category, e.g. `AccountIssue`
    #[serde(default)]
    pub category: String,
    pub status: SupportTicketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SupportTicket {
    /// `AccountIssue` -> `Account Issue`
    pub fn category_label(&self) -> String {
        split_pascal_case(&self.category)
    }

    pub fn user_label(&self) -> &str {
        self.user_name.as_deref().filter(|name| !name.is_empty()).unwrap_or("Unknown")
    }
}

/// Body for `PATCH /support/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketUpdate {
    pub status: SupportTicketStatus,
    pub admin_response: String,
}

/// Broadcast notice managed by admins
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notify {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /notify`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CreateNotify {
    pub title: String,
    pub description: String,
}

/// Body for `PATCH /notify/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UpdateNotify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn split_pascal_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format() {
        let report: Report = serde_json::from_str(
            r#"{"id":"r1","type":"Room","reason":"Spam","reporterId":"u1","targetId":"room9","status":"ActionTaken"}"#,
        )
        .unwrap();
        assert_eq!(report.kind, ReportType::Room);
        assert_eq!(report.status, ReportStatus::ActionTaken);
        assert_eq!(report.status.label(), "Action Taken");
        assert!(report.description.is_empty());
        assert_eq!(report.target_label(), "Unknown");
    }

    #[test]
    fn test_reason_label_splits_words() {
        let report: Report = serde_json::from_str(
            r#"{"id":"r1","type":"User","reason":"FakeProfile","reporterId":"u1","reporterName":"Asha","targetId":"u2","status":"Pending"}"#,
        )
        .unwrap();
        assert_eq!(report.reason_label(), "Fake Profile");
        assert_eq!(report.reporter_label(), "Asha");
    }

    #[test]
    fn test_unknown_status_kept_readable() {
        let ticket: SupportTicket = serde_json::from_str(
            r#"{"id":"t","userId":"u","subject":"s","category":"AccountIssue","status":"Escalated"}"#,
        )
        .unwrap();
        assert_eq!(ticket.status, SupportTicketStatus::Unknown);
        assert_eq!(ticket.category_label(), "Account Issue");
    }

    #[test]
    fn test_status_parse_roundtrips_option_values() {
        for status in ReportStatus::all() {
            assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SupportTicketStatus::parse("InProgress"), Some(SupportTicketStatus::InProgress));
        assert_eq!(SupportTicketStatus::parse("nope"), None);
    }

    #[test]
    fn test_update_bodies_are_camel_case() {
        let body = ReportUpdate {
            status: ReportStatus::Reviewed,
            admin_notes: "checked".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"status": "Reviewed", "adminNotes": "checked"})
        );
    }
}
