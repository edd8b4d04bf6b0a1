//! Admin session state

use crate::models::{Admin, AuthState};
use crate::services::AdminApi;
use dioxus::prelude::*;

/// Authentication context and methods
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    pub auth_state: Signal<AuthState>,
}

impl AuthContext {
    /// Re-validate the session cookie with `GET /admin/me`.
    ///
    /// An authenticated state is kept while the check runs, so navigation
    /// does not flash the loading screen.
    pub fn check_session(&self) {
        let mut auth_state = self.auth_state;

        spawn(async move {
            match AdminApi::get_profile().await {
                Ok(admin) => auth_state.set(AuthState::Authenticated(admin)),
                Err(error) => {
                    tracing::warn!(code = error.error_code(), "Session check failed: {}", error);
                    auth_state.set(AuthState::Unauthenticated);
                }
            }
        });
    }

    /// Record a successful login
    pub fn sign_in(&self, admin: Admin) {
        let mut auth_state = self.auth_state;
        auth_state.set(AuthState::Authenticated(admin));
    }

    /// End the session, then run `on_done` whether or not the backend answered
    pub fn logout(&self, on_done: impl FnOnce() + 'static) {
        let mut auth_state = self.auth_state;

        spawn(async move {
            match AdminApi::logout().await {
                Ok(_) => tracing::info!("Admin signed out"),
                Err(error) => tracing::warn!("Logout request failed: {}", error),
            }
            auth_state.set(AuthState::Unauthenticated);
            on_done();
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_state.read().is_authenticated()
    }

    pub fn is_checking(&self) -> bool {
        self.auth_state.read().is_checking()
    }

    pub fn current_admin(&self) -> Option<Admin> {
        self.auth_state.read().admin().cloned()
    }
}

/// Install the auth state; call once at the application root
pub fn use_auth_provider() -> AuthContext {
    let auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    AuthContext { auth_state }
}

/// Hook for authentication management in Dioxus components
pub fn use_auth() -> AuthContext {
    AuthContext {
        auth_state: use_context::<Signal<AuthState>>(),
    }
}
