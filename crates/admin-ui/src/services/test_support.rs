//! Mock REST backend shared by the service tests

use crate::config::AppConfig;
use crate::services::api_client::init_api_client;
use wiremock::MockServer;

/// Start a mock backend and point the global API client at it
pub async fn mock_backend() -> MockServer {
    let server = MockServer::start().await;
    init_api_client(&AppConfig {
        api_base_url: server.uri(),
        ..AppConfig::default()
    });
    server
}
