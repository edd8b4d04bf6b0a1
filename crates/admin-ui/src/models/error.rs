//! Error handling models and utilities

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the admin interface
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdminError {
    /// Non-2xx response from the REST backend
    #[error("{message}")]
    ApiError { message: String, status_code: Option<u16> },

    /// Network/connectivity errors
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// The request did not complete in time
    #[error("Request timed out after {timeout_ms}ms")]
    TimeoutError { timeout_ms: u32 },

    /// Response body could not be decoded
    #[error("Failed to parse {format} response: {message}")]
    ParseError { message: String, format: String },

    /// Form input rejected before it reached the backend
    #[error("Validation failed: {message}")]
    ValidationError { message: String, field: Option<String> },

    /// Client-side errors (frontend specific)
    #[error("Client error: {message}")]
    ClientError { message: String },
}

/// Result type alias for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Create an API error without a status code
    pub fn api(message: impl Into<String>) -> Self {
        AdminError::ApiError {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create an API error with status code
    pub fn api_with_status(message: impl Into<String>, status_code: u16) -> Self {
        AdminError::ApiError {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        AdminError::NetworkError {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(timeout_ms: u32) -> Self {
        AdminError::TimeoutError { timeout_ms }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, format: impl Into<String>) -> Self {
        AdminError::ParseError {
            message: message.into(),
            format: format.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AdminError::ValidationError {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific field
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AdminError::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a client error
    pub fn client(message: impl Into<String>) -> Self {
        AdminError::ClientError {
            message: message.into(),
        }
    }

    /// HTTP status attached to the error, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AdminError::ApiError { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Message suitable for toasts and inline banners
    pub fn user_message(&self) -> String {
        match self {
            AdminError::ApiError { message, .. } => message.clone(),
            AdminError::NetworkError { message } => format!("Network error: {}", message),
            AdminError::TimeoutError { .. } => "The server took too long to respond".to_string(),
            AdminError::ParseError { .. } => "Received an unexpected response from the server".to_string(),
            AdminError::ValidationError { message, field } => match field {
                Some(field) => format!("{}: {}", field, message),
                None => message.clone(),
            },
            AdminError::ClientError { message } => message.clone(),
        }
    }

    /// Stable error code, mostly for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::ApiError { .. } => "API_ERROR",
            AdminError::NetworkError { .. } => "NETWORK_ERROR",
            AdminError::TimeoutError { .. } => "TIMEOUT_ERROR",
            AdminError::ParseError { .. } => "PARSE_ERROR",
            AdminError::ValidationError { .. } => "VALIDATION_ERROR",
            AdminError::ClientError { .. } => "CLIENT_ERROR",
        }
    }

    /// Check if this is a client error (4xx or rejected locally)
    pub fn is_client_error(&self) -> bool {
        match self {
            AdminError::ApiError { status_code: Some(code), .. } => (400..500).contains(code),
            AdminError::ValidationError { .. } | AdminError::ClientError { .. } => true,
            _ => false,
        }
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, AdminError::ApiError { status_code: Some(code), .. } if *code >= 500)
    }

    /// Check if the backend rejected the session
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }

    /// Check if the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if the request never produced an HTTP response
    pub fn is_transport_error(&self) -> bool {
        matches!(self, AdminError::NetworkError { .. } | AdminError::TimeoutError { .. })
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::parse(err.to_string(), "JSON")
    }
}

impl From<url::ParseError> for AdminError {
    fn from(err: url::ParseError) -> Self {
        AdminError::client(format!("Invalid request URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_server_message() {
        let error = AdminError::api_with_status("User not found", 404);
        assert_eq!(error.to_string(), "User not found");
        assert_eq!(error.user_message(), "User not found");
        assert!(error.is_not_found());
        assert!(error.is_client_error());
        assert!(!error.is_server_error());
    }

    #[test]
    fn test_error_classification() {
        assert!(AdminError::api_with_status("Unauthorized", 401).is_auth_error());
        assert!(AdminError::api_with_status("Forbidden", 403).is_auth_error());
        assert!(AdminError::api_with_status("Boom", 502).is_server_error());
        assert!(!AdminError::api("no status").is_client_error());
        assert!(AdminError::validation("bad").is_client_error());
        assert!(AdminError::network("offline").is_transport_error());
        assert!(AdminError::timeout(5000).is_transport_error());
        assert!(!AdminError::client("x").is_transport_error());
    }

    #[test]
    fn test_validation_field_message() {
        let error = AdminError::validation_field("title", "Title is required");
        assert_eq!(error.user_message(), "title: Title is required");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: AdminError = err.into();
        assert!(matches!(error, AdminError::ParseError { ref format, .. } if format == "JSON"));
    }
}
