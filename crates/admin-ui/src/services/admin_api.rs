//! Admin accounts, session and moderation endpoints
//!
//! The session is a cookie set by `/admin/login`, so none of these calls
//! carry credentials explicitly.

use crate::models::{
    Admin, AdminCredentials, AdminLoginResponse, AdminResult, AdminUpdate, CreateNotify, MessageResponse,
    NewAdmin, Notify, Report, ReportUpdate, SupportTicket, SupportTicketUpdate, UpdateNotify,
};
use crate::services::api_client::{encode_segment, get_api_client};

/// Admin API client
pub struct AdminApi;

impl AdminApi {
    /// Register a new admin (signup)
    pub async fn create_admin(admin: &NewAdmin) -> AdminResult<Admin> {
        get_api_client()?.post_json("/admin", admin).await
    }

    pub async fn login(credentials: &AdminCredentials) -> AdminResult<AdminLoginResponse> {
        let response: AdminLoginResponse = get_api_client()?.post_json("/admin/login", credentials).await?;
        tracing::info!(email = %credentials.email, "Admin logged in");
        Ok(response)
    }

    pub async fn logout() -> AdminResult<MessageResponse> {
        let response = get_api_client()?.post_empty("/admin/logout").await?;
        tracing::info!("Admin logged out");
        Ok(response)
    }

    /// Current session's admin; fails with 401 when logged out
    pub async fn get_profile() -> AdminResult<Admin> {
        get_api_client()?.get_json("/admin/me").await
    }

    pub async fn get_admins() -> AdminResult<Vec<Admin>> {
        get_api_client()?.get_json("/admin").await
    }

    pub async fn get_admin(id: &str) -> AdminResult<Admin> {
        get_api_client()?.get_json(&format!("/admin/{}", encode_segment(id))).await
    }

    pub async fn update_admin(id: &str, update: &AdminUpdate) -> AdminResult<Admin> {
        get_api_client()?
            .patch_json(&format!("/admin/{}", encode_segment(id)), update)
            .await
    }

    pub async fn delete_admin(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?.delete(&format!("/admin/{}", encode_segment(id))).await
    }

    pub async fn get_reports() -> AdminResult<Vec<Report>> {
        get_api_client()?.get_json("/reports").await
    }

    pub async fn get_report(id: &str) -> AdminResult<Report> {
        get_api_client()?.get_json(&format!("/reports/{}", encode_segment(id))).await
    }

    pub async fn update_report(id: &str, update: &ReportUpdate) -> AdminResult<Report> {
        get_api_client()?
            .patch_json(&format!("/reports/{}", encode_segment(id)), update)
            .await
    }

    pub async fn delete_report(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?.delete(&format!("/reports/{}", encode_segment(id))).await
    }

    pub async fn get_support_tickets() -> AdminResult<Vec<SupportTicket>> {
        get_api_client()?.get_json("/support").await
    }

    pub async fn get_support_ticket(id: &str) -> AdminResult<SupportTicket> {
        get_api_client()?.get_json(&format!("/support/{}", encode_segment(id))).await
    }

    pub async fn update_support_ticket(id: &str, update: &SupportTicketUpdate) -> AdminResult<SupportTicket> {
        get_api_client()?
            .patch_json(&format!("/support/{}", encode_segment(id)), update)
            .await
    }

    pub async fn delete_support_ticket(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?.delete(&format!("/support/{}", encode_segment(id))).await
    }

    /// Broadcast notices (`/notify`), not the per-user inbox
    pub async fn get_notifications() -> AdminResult<Vec<Notify>> {
        get_api_client()?.get_json("/notify").await
    }

    pub async fn get_notification(id: &str) -> AdminResult<Notify> {
        get_api_client()?.get_json(&format!("/notify/{}", encode_segment(id))).await
    }

    pub async fn create_notification(notify: &CreateNotify) -> AdminResult<Notify> {
        get_api_client()?.post_json("/notify", notify).await
    }

    pub async fn update_notification(id: &str, update: &UpdateNotify) -> AdminResult<Notify> {
        get_api_client()?
            .patch_json(&format!("/notify/{}", encode_segment(id)), update)
            .await
    }

    pub async fn delete_notification(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?.delete(&format!("/notify/{}", encode_segment(id))).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::{ReportStatus, SupportTicketStatus};
    use crate::services::test_support::mock_backend;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let server = mock_backend().await;
        Mock::given(method("POST"))
            .and(path("/admin/login"))
            .and(body_json(json!({"email": "root@roomie.app", "password": "hunter22"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "admin": {"id": "a1", "name": "Root", "email": "root@roomie.app"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = AdminApi::login(&AdminCredentials {
            email: "root@roomie.app".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.admin.map(|a| a.id), Some("a1".to_string()));
    }

    #[tokio::test]
    async fn test_get_profile_unauthorized() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/admin/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
            .mount(&server)
            .await;

        let error = AdminApi::get_profile().await.unwrap_err();
        assert!(error.is_auth_error());
        assert_eq!(error.user_message(), "Unauthorized");
    }

    #[tokio::test]
    async fn test_update_report() {
        let server = mock_backend().await;
        Mock::given(method("PATCH"))
            .and(path("/reports/r%201"))
            .and(body_json(json!({"status": "Dismissed", "adminNotes": "duplicate"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "r 1", "type": "User", "reason": "Spam", "reporterId": "u1",
                "targetId": "u2", "status": "Dismissed", "adminNotes": "duplicate"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let report = AdminApi::update_report(
            "r 1",
            &ReportUpdate {
                status: ReportStatus::Dismissed,
                admin_notes: "duplicate".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(report.status, ReportStatus::Dismissed);
        assert_eq!(report.admin_notes.as_deref(), Some("duplicate"));
    }

    #[tokio::test]
    async fn test_support_ticket_roundtrip() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/support"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t1", "userId": "u1", "subject": "Cannot login", "category": "AccountIssue", "status": "Open"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/support/t1"))
            .and(body_json(json!({"status": "Resolved", "adminResponse": "Password reset sent"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": "t1", "userId": "u1", "subject": "Cannot login", "category": "AccountIssue",
                 "status": "Resolved", "adminResponse": "Password reset sent"}
            )))
            .mount(&server)
            .await;

        let tickets = AdminApi::get_support_tickets().await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].status, SupportTicketStatus::Open);

        let ticket = AdminApi::update_support_ticket(
            "t1",
            &SupportTicketUpdate {
                status: SupportTicketStatus::Resolved,
                admin_response: "Password reset sent".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(ticket.status, SupportTicketStatus::Resolved);
    }

    #[tokio::test]
    async fn test_create_and_delete_notify() {
        let server = mock_backend().await;
        Mock::given(method("POST"))
            .and(path("/notify"))
            .and(body_json(json!({"title": "Maintenance", "description": "Sunday 2am"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!(
                {"id": "n1", "title": "Maintenance", "description": "Sunday 2am"}
            )))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/notify/n1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Deleted"})))
            .mount(&server)
            .await;

        let notify = AdminApi::create_notification(&CreateNotify {
            title: "Maintenance".into(),
            description: "Sunday 2am".into(),
        })
        .await
        .unwrap();
        assert_eq!(notify.id, "n1");

        let deleted = AdminApi::delete_notification(&notify.id).await.unwrap();
        assert_eq!(deleted.message, "Deleted");
    }
}
