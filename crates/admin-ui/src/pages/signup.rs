//! Admin account registration

use crate::app::Route;
use crate::components::{Button, ErrorBanner, TextField};
use crate::hooks::use_toast;
use crate::models::{AdminError, AdminResult, NewAdmin};
use crate::services::AdminApi;
use dioxus::prelude::*;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq)]
struct SignupForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl SignupForm {
    fn validate(&self) -> AdminResult<NewAdmin> {
        if self.password != self.confirm_password {
            return Err(AdminError::validation("Passwords do not match"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AdminError::validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(NewAdmin {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[component]
pub fn Signup() -> Element {
    let toaster = use_toast();
    let navigator = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let admin = match form.read().validate() {
            Ok(admin) => admin,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };

        error.set(None);
        loading.set(true);
        spawn(async move {
            match AdminApi::create_admin(&admin).await {
                Ok(created) => {
                    tracing::info!("Created admin account {}", created.email);
                    toaster.success("Admin account created. Please sign in.");
                    navigator.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!(code = e.error_code(), "Signup failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let current = form();

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4",
            div { class: "max-w-md w-full space-y-8",
                div { class: "text-center",
                    h1 { class: "text-3xl font-bold text-gray-900", "Create Admin Account" }
                    p { class: "mt-2 text-sm text-gray-600", "Register a new administrator" }
                }

                div { class: "bg-white shadow-xl rounded-xl p-8 space-y-6",
                    if let Some(message) = error() {
                        ErrorBanner { message: message }
                    }

                    form { class: "space-y-5", onsubmit: handle_signup,
                        TextField {
                            label: Some("Full Name".to_string()),
                            value: current.name,
                            placeholder: "Jane Doe",
                            required: true,
                            oninput: move |value: String| form.write().name = value,
                        }
                        TextField {
                            label: Some("Email Address".to_string()),
                            input_type: "email",
                            value: current.email,
                            placeholder: "admin@example.com",
                            required: true,
                            oninput: move |value: String| form.write().email = value,
                        }
                        TextField {
                            label: Some("Password".to_string()),
                            input_type: "password",
                            value: current.password,
                            required: true,
                            oninput: move |value: String| form.write().password = value,
                        }
                        TextField {
                            label: Some("Confirm Password".to_string()),
                            input_type: "password",
                            value: current.confirm_password,
                            required: true,
                            oninput: move |value: String| form.write().confirm_password = value,
                        }
                        Button { button_type: "submit", loading: loading(), loading_label: "Creating account...", "Create Account" }
                    }

                    p { class: "text-center text-sm text-gray-600",
                        "Already have an account? "
                        Link { class: "font-medium text-indigo-600 hover:text-indigo-500", to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: " Root ".into(),
            email: "root@roomie.app".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_mismatched_passwords_rejected() {
        let error = form("secret1", "secret2").validate().unwrap_err();
        assert_eq!(error.user_message(), "Passwords do not match");
    }

    #[test]
    fn test_short_password_rejected() {
        let error = form("abc", "abc").validate().unwrap_err();
        assert_eq!(error.user_message(), "Password must be at least 6 characters long");
    }

    #[test]
    fn test_valid_form_trims_name() {
        let admin = form("secret1", "secret1").validate().unwrap();
        assert_eq!(admin.name, "Root");
        assert_eq!(admin.password, "secret1");
    }
}
