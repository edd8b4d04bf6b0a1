//! Admin account and session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard administrator account
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Body for `POST /admin` (signup)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /admin/login`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// Partial update body for `PATCH /admin/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Response of `POST /admin/login`; the session itself travels as a cookie
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub admin: Option<Admin>,
    #[serde(default, rename = "accessToken", alias = "token")]
    pub access_token: Option<String>,
}

/// Authentication state of the dashboard shell
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    /// Session check in flight
    #[default]
    Checking,
    /// `GET /admin/me` succeeded
    Authenticated(Admin),
    /// No valid session
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, AuthState::Checking)
    }

    pub fn admin(&self) -> Option<&Admin> {
        match self {
            AuthState::Authenticated(admin) => Some(admin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_token_alias() {
        let response: AdminLoginResponse = serde_json::from_str(
            r#"{"message":"ok","token":"abc","admin":{"id":"1","name":"Root","email":"r@x.io"}}"#,
        )
        .unwrap();
        assert_eq!(response.access_token.as_deref(), Some("abc"));
        assert_eq!(response.admin.unwrap().name, "Root");
    }

    #[test]
    fn test_admin_update_skips_absent_fields() {
        let update = AdminUpdate {
            name: Some("New".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"name": "New"}));
    }

    #[test]
    fn test_auth_state_accessors() {
        assert!(AuthState::default().is_checking());
        let state = AuthState::Authenticated(Admin::default());
        assert!(state.is_authenticated());
        assert!(state.admin().is_some());
        assert!(AuthState::Unauthenticated.admin().is_none());
    }
}
