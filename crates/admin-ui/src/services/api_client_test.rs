//! Tests for the API client against a mock backend

use super::api_client::*;
use super::test_support::mock_backend;
use crate::models::{AdminError, MessageResponse, UserFilters};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing_test::traced_test;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Deserialize, Debug, PartialEq)]
struct Echo {
    ok: bool,
}

#[tokio::test]
async fn test_get_with_query_filters() {
    let server = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("city", "Pune"))
        .and(query_param("isActive", "true"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let filters = UserFilters {
        city: Some("Pune".into()),
        is_active: Some(true),
        ..Default::default()
    };
    let client = get_api_client().unwrap();
    let echo: Echo = client.get_json_with_query("/users", &filters).await.unwrap();
    assert_eq!(echo, Echo { ok: true });

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("gender"));
    assert!(!query.contains("limit"));
}

#[tokio::test]
async fn test_error_status_uses_server_message() {
    let server = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/rooms/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Room not found"})))
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let result: Result<Echo, _> = client.get_json("/rooms/missing").await;
    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "Room not found");
    assert_eq!(error.status_code(), Some(404));
}

#[tokio::test]
async fn test_error_status_without_json_body() {
    let server = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream crashed"))
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let result: Result<Echo, _> = client.get_json("admin").await;
    assert_eq!(
        result,
        Err(AdminError::api_with_status("API Error: 500 Internal Server Error", 500))
    );
}

#[tokio::test]
async fn test_no_content_decodes_as_empty_object() {
    let server = mock_backend().await;
    Mock::given(method("DELETE"))
        .and(path("/notify/n1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let response: MessageResponse = client.delete("/notify/n1").await.unwrap();
    assert_eq!(response, MessageResponse::default());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_patch_sends_json_body() {
    let server = mock_backend().await;
    Mock::given(method("PATCH"))
        .and(path("/reports/r1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"status": "Reviewed", "adminNotes": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let echo: Echo = client
        .patch_json("/reports/r1", &json!({"status": "Reviewed", "adminNotes": ""}))
        .await
        .unwrap();
    assert!(echo.ok);
}

#[tokio::test]
async fn test_body_dropped_for_get() {
    let server = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let config = RequestConfig::new(HttpMethod::Get, "/admin/me")
        .with_json_body(&json!({"ignored": true}))
        .unwrap();
    let _: Echo = client.execute_request(config).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let config = RequestConfig::new(HttpMethod::Get, "/slow").with_timeout(50);
    let result: Result<Echo, _> = client.execute_request(config).await;
    assert_eq!(result, Err(AdminError::timeout(50)));
}

#[tokio::test]
async fn test_session_cookie_is_replayed() {
    let server = mock_backend().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "admin_session=abc123; Path=/")
                .set_body_json(json!({"ok": true})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/me"))
        .and(header("cookie", "admin_session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let _: Echo = client.post_empty("/admin/login").await.unwrap();
    let me: Echo = client.get_json("/admin/me").await.unwrap();
    assert!(me.ok);
}

#[tokio::test]
#[traced_test]
async fn test_failed_request_is_logged() {
    let server = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/used-items"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = get_api_client().unwrap();
    let result: Result<Echo, _> = client.get_json("/used-items").await;
    assert!(result.unwrap_err().is_server_error());
    assert!(logs_contain("API request failed"));
}
