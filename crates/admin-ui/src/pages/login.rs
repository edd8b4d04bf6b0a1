//! Admin sign-in page

use crate::app::Route;
use crate::components::{Button, ErrorBanner, TextField};
use crate::hooks::use_auth;
use crate::models::{AdminCredentials, AdminError, AdminResult};
use crate::services::AdminApi;
use dioxus::prelude::*;

fn credentials(email: &str, password: &str) -> AdminResult<AdminCredentials> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AdminError::validation("Please enter your email and password"));
    }
    Ok(AdminCredentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Login page component
#[component]
pub fn Login() -> Element {
    let auth_context = use_auth();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let body = match credentials(&email.read(), &password.read()) {
            Ok(body) => body,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };

        error.set(None);
        loading.set(true);
        spawn(async move {
            let signed_in = match AdminApi::login(&body).await {
                // older backends only set the cookie, so ask who we are
                Ok(response) => match response.admin {
                    Some(admin) => Ok(admin),
                    None => AdminApi::get_profile().await,
                },
                Err(e) => Err(e),
            };

            match signed_in {
                Ok(admin) => {
                    tracing::info!("Admin {} signed in", admin.email);
                    auth_context.sign_in(admin);
                    navigator.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(code = e.error_code(), "Login failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4",
            div { class: "max-w-md w-full space-y-8",
                div { class: "text-center",
                    div { class: "mx-auto h-16 w-16 bg-gradient-to-br from-indigo-600 to-indigo-800 rounded-2xl flex items-center justify-center",
                        span { class: "text-white font-bold text-2xl", "HR" }
                    }
                    h1 { class: "mt-6 text-3xl font-bold text-gray-900", "Welcome Back" }
                    p { class: "mt-2 text-sm text-gray-600", "Sign in to access your admin dashboard" }
                }

                div { class: "bg-white shadow-xl rounded-xl p-8 space-y-6",
                    if let Some(message) = error() {
                        ErrorBanner { message: message }
                    }

                    form { class: "space-y-6", onsubmit: handle_login,
                        TextField {
                            label: Some("Email Address".to_string()),
                            input_type: "email",
                            value: email(),
                            placeholder: "admin@example.com",
                            required: true,
                            oninput: move |value: String| email.set(value),
                        }
                        TextField {
                            label: Some("Password".to_string()),
                            input_type: "password",
                            value: password(),
                            placeholder: "••••••••",
                            required: true,
                            oninput: move |value: String| password.set(value),
                        }
                        Button { button_type: "submit", loading: loading(), loading_label: "Signing in...", "Sign In" }
                    }

                    p { class: "text-center text-sm text-gray-600",
                        "Don't have an account? "
                        Link { class: "font-medium text-indigo-600 hover:text-indigo-500", to: Route::Signup {}, "Create one" }
                    }
                }
            }
        }
    }
}
