//! Per-user inbox notifications (`/notifications`)

use crate::models::{
    AdminResult, CountResponse, MarkAllReadResponse, MessageResponse, NewNotification, Notification,
    NotificationFilters, NotificationUpdate,
};
use crate::services::api_client::{HttpMethod, RequestConfig, encode_segment, get_api_client};

/// Notifications API client
pub struct NotificationsApi;

impl NotificationsApi {
    pub async fn get_notifications(filters: &NotificationFilters) -> AdminResult<Vec<Notification>> {
        get_api_client()?.get_json_with_query("/notifications", filters).await
    }

    /// Inbox of one user; `unread_only` is omitted from the query when `None`
    pub async fn get_user_notifications(receiver_id: &str, unread_only: Option<bool>) -> AdminResult<Vec<Notification>> {
        let mut config = RequestConfig::new(
            HttpMethod::Get,
            format!("/notifications/user/{}", encode_segment(receiver_id)),
        );
        if let Some(unread_only) = unread_only {
            config = config.with_param("unreadOnly", unread_only.to_string());
        }
        get_api_client()?.execute_request(config).await
    }

    pub async fn get_unread_count(receiver_id: &str) -> AdminResult<CountResponse> {
        get_api_client()?
            .get_json(&format!("/notifications/user/{}/unread-count", encode_segment(receiver_id)))
            .await
    }

    pub async fn get_notification(id: &str) -> AdminResult<Notification> {
        get_api_client()?
            .get_json(&format!("/notifications/{}", encode_segment(id)))
            .await
    }

    pub async fn create_notification(notification: &NewNotification) -> AdminResult<Notification> {
        get_api_client()?.post_json("/notifications", notification).await
    }

    pub async fn update_notification(id: &str, update: &NotificationUpdate) -> AdminResult<Notification> {
        get_api_client()?
            .patch_json(&format!("/notifications/{}", encode_segment(id)), update)
            .await
    }

    pub async fn mark_as_read(id: &str) -> AdminResult<Notification> {
        get_api_client()?
            .patch_empty(&format!("/notifications/{}/read", encode_segment(id)))
            .await
    }

    pub async fn mark_all_as_read(receiver_id: &str) -> AdminResult<MarkAllReadResponse> {
        get_api_client()?
            .patch_empty(&format!("/notifications/user/{}/read-all", encode_segment(receiver_id)))
            .await
    }

    pub async fn remove_notification(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?
            .delete(&format!("/notifications/{}", encode_segment(id)))
            .await
    }
}
