//! HTTP client for the Hello Roomie REST backend
//!
//! The request pipeline is target independent: a [`RequestConfig`] is run
//! through the request interceptors, turned into a URL with [`build_url`],
//! sent by the platform transport and decoded by [`decode_response`]. Only
//! `send_request` differs between the browser (`fetch`) and native
//! (`reqwest`) builds.

use crate::config::AppConfig;
use crate::models::{AdminError, AdminResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use url::Url;

/// HTTP methods supported by the API client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Whether a JSON body is sent for this method
    pub fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Request configuration for API calls
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    pub timeout: Option<u32>,
}

impl RequestConfig {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append every present field of `filters` as a query parameter
    pub fn with_query<T: Serialize>(mut self, filters: &T) -> AdminResult<Self> {
        self.params.extend(query_pairs(filters)?);
        Ok(self)
    }

    pub fn with_json_body<T: Serialize>(mut self, data: &T) -> AdminResult<Self> {
        let json_data = serde_json::to_string(data)
            .map_err(|e| AdminError::client(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(json_data);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }
}

/// Request interceptor trait for modifying requests before sending
pub trait RequestInterceptor {
    fn intercept(&self, config: &mut RequestConfig) -> AdminResult<()>;
}

/// Marks every request as JSON unless the caller already chose a header
pub struct JsonHeadersInterceptor;

impl RequestInterceptor for JsonHeadersInterceptor {
    fn intercept(&self, config: &mut RequestConfig) -> AdminResult<()> {
        config
            .headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| "application/json".to_string());
        config
            .headers
            .entry("Accept".to_string())
            .or_insert_with(|| "application/json".to_string());
        Ok(())
    }
}

/// Transport-neutral view of an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Join base URL, endpoint path and query pairs.
///
/// A missing leading `/` on `path` is added. Pairs keep their order and are
/// form-encoded.
pub fn build_url(base_url: &str, path: &str, params: &[(String, String)]) -> AdminResult<String> {
    let separator = if path.starts_with('/') { "" } else { "/" };
    let mut url = Url::parse(&format!("{}{}{}", base_url.trim_end_matches('/'), separator, path))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url.into())
}

/// Flatten a filter struct into query pairs.
///
/// `null` fields are omitted, strings are used verbatim and other scalars
/// use their JSON text (`true`, `42`, `7.5`).
pub fn query_pairs<T: Serialize>(filters: &T) -> AdminResult<Vec<(String, String)>> {
    let value = serde_json::to_value(filters)?;
    let object = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(object) => object,
        other => {
            return Err(AdminError::client(format!(
                "Query parameters must be an object, got {}",
                other
            )));
        }
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::String(text) => pairs.push((key, text)),
            Value::Bool(_) | Value::Number(_) => pairs.push((key, value.to_string())),
            Value::Array(_) | Value::Object(_) => {
                return Err(AdminError::client(format!(
                    "Query parameter '{}' must be a scalar",
                    key
                )));
            }
        }
    }
    Ok(pairs)
}

/// Percent-encode one path segment (ids, cities, phone numbers)
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Message for a non-2xx response: the server's `message`, else a generic one
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    let fallback = format!("API Error: {} {}", status, status_text);
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return fallback;
    };
    match json.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        _ => fallback,
    }
}

/// Turn a raw response into a typed result.
///
/// 204 and empty bodies decode as `{}`, so response types for those
/// endpoints must tolerate missing fields.
pub fn decode_response<T: DeserializeOwned>(response: RawResponse) -> AdminResult<T> {
    if !(200..300).contains(&response.status) {
        return Err(AdminError::api_with_status(
            error_message(response.status, &response.status_text, &response.body),
            response.status,
        ));
    }

    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Object(serde_json::Map::new()))?);
    }

    Ok(serde_json::from_str(&response.body)?)
}

/// Main API client
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    request_interceptors: Rc<RefCell<Vec<Box<dyn RequestInterceptor>>>>,
    default_timeout: u32,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let mut client = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_interceptors: Rc::new(RefCell::new(Vec::new())),
            default_timeout: crate::config::DEFAULT_TIMEOUT_MS,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        };

        client.add_request_interceptor(Box::new(JsonHeadersInterceptor));
        client
    }

    /// Create a client from resolved application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let mut client = Self::new(config.api_base_url.clone());
        client.default_timeout = config.request_timeout_ms;
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_timeout(&self) -> u32 {
        self.default_timeout
    }

    /// Add a request interceptor
    pub fn add_request_interceptor(&mut self, interceptor: Box<dyn RequestInterceptor>) {
        self.request_interceptors.borrow_mut().push(interceptor);
    }

    /// `GET path`
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> AdminResult<R> {
        self.execute_request(RequestConfig::new(HttpMethod::Get, path)).await
    }

    /// `GET path?filters`
    pub async fn get_json_with_query<Q: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &Q,
    ) -> AdminResult<R> {
        let config = RequestConfig::new(HttpMethod::Get, path).with_query(filters)?;
        self.execute_request(config).await
    }

    /// `POST path` with a JSON body
    pub async fn post_json<T: Serialize, R: DeserializeOwned>(&self, path: &str, data: &T) -> AdminResult<R> {
        let config = RequestConfig::new(HttpMethod::Post, path).with_json_body(data)?;
        self.execute_request(config).await
    }

    /// `POST path` without a body
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> AdminResult<R> {
        self.execute_request(RequestConfig::new(HttpMethod::Post, path)).await
    }

    /// `PUT path` with a JSON body
    pub async fn put_json<T: Serialize, R: DeserializeOwned>(&self, path: &str, data: &T) -> AdminResult<R> {
        let config = RequestConfig::new(HttpMethod::Put, path).with_json_body(data)?;
        self.execute_request(config).await
    }

    /// `PATCH path` with a JSON body
    pub async fn patch_json<T: Serialize, R: DeserializeOwned>(&self, path: &str, data: &T) -> AdminResult<R> {
        let config = RequestConfig::new(HttpMethod::Patch, path).with_json_body(data)?;
        self.execute_request(config).await
    }

    /// `PATCH path` without a body
    pub async fn patch_empty<R: DeserializeOwned>(&self, path: &str) -> AdminResult<R> {
        self.execute_request(RequestConfig::new(HttpMethod::Patch, path)).await
    }

    /// `DELETE path`
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> AdminResult<R> {
        self.execute_request(RequestConfig::new(HttpMethod::Delete, path)).await
    }

    /// Execute a custom request configuration
    pub async fn execute_request<R: DeserializeOwned>(&self, mut config: RequestConfig) -> AdminResult<R> {
        if config.timeout.is_none() {
            config.timeout = Some(self.default_timeout);
        }
        if !config.method.sends_body() {
            config.body = None;
        }

        for interceptor in self.request_interceptors.borrow().iter() {
            interceptor.intercept(&mut config)?;
        }

        let url = build_url(&self.base_url, &config.path, &config.params)?;
        tracing::debug!(method = config.method.as_str(), url = %url, "API request");

        let result = match self.send_request(&url, &config).await {
            Ok(response) => decode_response(response),
            Err(error) => Err(error),
        };

        if let Err(error) = &result {
            tracing::error!(
                method = config.method.as_str(),
                url = %url,
                code = error.error_code(),
                "API request failed: {}",
                error
            );
        }
        result
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_request(&self, url: &str, config: &RequestConfig) -> AdminResult<RawResponse> {
        let method = match config.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };
        let timeout_ms = config.timeout.unwrap_or(self.default_timeout);

        let mut request = self
            .http
            .request(method, url)
            .timeout(std::time::Duration::from_millis(u64::from(timeout_ms)));
        for (key, value) in &config.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &config.body {
            request = request.body(body.clone());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                AdminError::timeout(timeout_ms)
            } else {
                AdminError::network(e.to_string())
            }
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::network(format!("Failed to read response body: {}", e)))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_request(&self, url: &str, config: &RequestConfig) -> AdminResult<RawResponse> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response, window};

        let opts = RequestInit::new();
        opts.set_method(config.method.as_str());
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::Include);
        if let Some(body) = &config.body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| AdminError::client("Failed to create request"))?;
        let headers = request.headers();
        for (key, value) in &config.headers {
            headers
                .set(key, value)
                .map_err(|_| AdminError::client(format!("Failed to set header: {}", key)))?;
        }

        let window = window().ok_or_else(|| AdminError::client("No window object available"))?;
        let timeout_ms = config.timeout.unwrap_or(self.default_timeout);
        let fetch_promise = fetch_with_timeout(&window, window.fetch_with_request(&request), timeout_ms);

        let resp_value = JsFuture::from(fetch_promise).await.map_err(|e| match e.as_string() {
            Some(reason) if reason == TIMEOUT_REASON => AdminError::timeout(timeout_ms),
            Some(reason) => AdminError::network(reason),
            None => AdminError::network("Network request failed"),
        })?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| AdminError::client("Invalid response type"))?;

        let text_promise = response
            .text()
            .map_err(|_| AdminError::client("Failed to read response body"))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|_| AdminError::network("Failed to read response body"))?
            .as_string()
            .unwrap_or_default();

        Ok(RawResponse {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

#[cfg(target_arch = "wasm32")]
const TIMEOUT_REASON: &str = "Request timeout";

/// Race `fetch` against a rejecting timer
#[cfg(target_arch = "wasm32")]
fn fetch_with_timeout(window: &web_sys::Window, fetch_promise: js_sys::Promise, timeout_ms: u32) -> js_sys::Promise {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    let window = window.clone();
    let timeout_promise = js_sys::Promise::new(&mut |_resolve, reject| {
        let callback = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(TIMEOUT_REASON));
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout_ms as i32,
        );
    });

    js_sys::Promise::race(&js_sys::Array::of2(&fetch_promise, &timeout_promise))
}

thread_local! {
    static API_CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
}

/// Initialize the global API client
pub fn init_api_client(config: &AppConfig) {
    let client = ApiClient::from_config(config);
    tracing::info!(base_url = client.base_url(), "API client initialized");
    API_CLIENT.with(|api| {
        *api.borrow_mut() = Some(client);
    });
}

/// Get the global API client instance
pub fn get_api_client() -> AdminResult<ApiClient> {
    API_CLIENT.with(|api| {
        api.borrow()
            .as_ref()
            .cloned()
            .ok_or_else(|| AdminError::client("API client not initialized. Call init_api_client() first."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize)]
    struct Filters {
        city: Option<String>,
        #[serde(rename = "isActive")]
        is_active: Option<bool>,
        limit: Option<u32>,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Ack {
        #[serde(default)]
        message: String,
    }

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert!(!HttpMethod::Get.sends_body());
        assert!(!HttpMethod::Delete.sends_body());
        assert!(HttpMethod::Patch.sends_body());
    }

    #[test]
    fn test_build_url_adds_missing_slash() {
        let url = build_url("https://api.example.com", "rooms", &[]).unwrap();
        assert_eq!(url, "https://api.example.com/rooms");
        let url = build_url("https://api.example.com/", "/rooms", &[]).unwrap();
        assert_eq!(url, "https://api.example.com/rooms");
    }

    #[test]
    fn test_build_url_appends_params_in_order() {
        let params = vec![
            ("city".to_string(), "New Delhi".to_string()),
            ("limit".to_string(), "100".to_string()),
        ];
        let url = build_url("https://api.example.com", "/users", &params).unwrap();
        assert_eq!(url, "https://api.example.com/users?city=New+Delhi&limit=100");
    }

    #[test]
    fn test_query_pairs_omits_absent_values() {
        let filters = Filters {
            city: None,
            is_active: Some(true),
            limit: Some(100),
        };
        let pairs = query_pairs(&filters).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("isActive".to_string(), "true".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
        assert!(query_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn test_query_pairs_rejects_non_object() {
        assert!(query_pairs(&vec![1, 2]).is_err());
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("New Delhi"), "New%20Delhi");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("+911234"), "%2B911234");
    }

    #[test]
    fn test_error_message_prefers_server_message() {
        assert_eq!(error_message(404, "Not Found", r#"{"message":"Room not found"}"#), "Room not found");
        assert_eq!(
            error_message(400, "Bad Request", r#"{"message":["title should not be empty","x"]}"#),
            "title should not be empty,x"
        );
        assert_eq!(error_message(500, "Internal Server Error", "<html>"), "API Error: 500 Internal Server Error");
        assert_eq!(error_message(401, "Unauthorized", r#"{"message":""}"#), "API Error: 401 Unauthorized");
        assert_eq!(error_message(502, "Bad Gateway", r#"{"error":"x"}"#), "API Error: 502 Bad Gateway");
    }

    #[test]
    fn test_decode_response_no_content() {
        let ack: Ack = decode_response(RawResponse {
            status: 204,
            status_text: "No Content".into(),
            body: String::new(),
        })
        .unwrap();
        assert_eq!(ack, Ack { message: String::new() });
    }

    #[test]
    fn test_decode_response_error_status() {
        let result: AdminResult<Ack> = decode_response(RawResponse {
            status: 403,
            status_text: "Forbidden".into(),
            body: r#"{"message":"Admins only"}"#.into(),
        });
        assert_eq!(result, Err(AdminError::api_with_status("Admins only", 403)));
    }

    #[test]
    fn test_decode_response_bad_json_is_parse_error() {
        let result: AdminResult<Ack> = decode_response(RawResponse {
            status: 200,
            status_text: "OK".into(),
            body: "not json".into(),
        });
        assert!(matches!(result, Err(AdminError::ParseError { .. })));
    }

    #[test]
    fn test_request_config_builder() {
        let config = RequestConfig::new(HttpMethod::Post, "/notify")
            .with_header("X-Custom", "value")
            .with_param("dryRun", "true")
            .with_json_body(&serde_json::json!({"title": "Hi"}))
            .unwrap()
            .with_timeout(5000);

        assert_eq!(config.headers.get("X-Custom"), Some(&"value".to_string()));
        assert_eq!(config.params, vec![("dryRun".to_string(), "true".to_string())]);
        assert_eq!(config.body.as_deref(), Some(r#"{"title":"Hi"}"#));
        assert_eq!(config.timeout, Some(5000));
    }

    #[test]
    fn test_json_headers_interceptor_keeps_caller_headers() {
        let mut config = RequestConfig::new(HttpMethod::Get, "/users").with_header("Accept", "text/plain");
        JsonHeadersInterceptor.intercept(&mut config).unwrap();
        assert_eq!(config.headers.get("Accept"), Some(&"text/plain".to_string()));
        assert_eq!(config.headers.get("Content-Type"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_global_api_client() {
        let config = AppConfig {
            api_base_url: "http://test.example.com".to_string(),
            request_timeout_ms: 1234,
            ..AppConfig::default()
        };
        init_api_client(&config);
        let client = get_api_client().unwrap();
        assert_eq!(client.base_url(), "http://test.example.com");
        assert_eq!(client.default_timeout(), 1234);
    }
}
