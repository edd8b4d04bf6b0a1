//! Edit or delete a single broadcast notice

use super::notify::notify_form;
use crate::app::Route;
use crate::components::{Button, ButtonVariant, PageLoader, TextArea, TextField};
use crate::hooks::{use_remote, use_toast};
use crate::models::UpdateNotify;
use crate::services::AdminApi;
use crate::utils::{confirm, format_datetime};
use dioxus::prelude::*;

#[component]
pub fn NotifyDetail(id: String) -> Element {
    let toaster = use_toast();
    let navigator = use_navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let fetch_id = id.clone();
    let notice = use_remote(move || {
        let id = fetch_id.clone();
        async move { AdminApi::get_notification(&id).await.map(Some) }
    });

    use_effect(move || {
        if let Some(loaded) = notice.data.read().as_ref() {
            title.set(loaded.title.clone());
            description.set(loaded.description.clone());
        }
    });

    let save_id = id.clone();
    let save = move |_: MouseEvent| {
        let body = match notify_form(&title.read(), &description.read()) {
            Ok(body) => body,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };
        let id = save_id.clone();
        let update = UpdateNotify {
            title: Some(body.title),
            description: Some(body.description),
        };
        saving.set(true);
        spawn(async move {
            match AdminApi::update_notification(&id, &update).await {
                Ok(_) => {
                    toaster.success("Notification updated successfully");
                    notice.refresh();
                }
                Err(error) => {
                    tracing::error!("Failed to update notification {}: {}", id, error);
                    toaster.error("Failed to update notification");
                }
            }
            saving.set(false);
        });
    };

    let delete = move |_: MouseEvent| {
        if !confirm("Are you sure you want to delete this notification?") {
            return;
        }
        let id = id.clone();
        spawn(async move {
            match AdminApi::delete_notification(&id).await {
                Ok(_) => {
                    toaster.success("Notification deleted successfully");
                    navigator.push(Route::NotifyList {});
                }
                Err(error) => {
                    tracing::error!("Failed to delete notification {}: {}", id, error);
                    toaster.error("Failed to delete notification");
                }
            }
        });
    };

    let loaded = notice.data.read().clone();
    let Some(current) = loaded else {
        if notice.is_loading() {
            return rsx! { PageLoader { message: "Loading notification..." } };
        }
        return rsx! {
            div { class: "p-6 text-center",
                h2 { class: "text-xl font-semibold text-gray-800", "Notification not found" }
                Link { class: "mt-4 inline-block text-purple-600 font-medium", to: Route::NotifyList {}, "Go Back" }
            }
        };
    };

    let created = format_datetime(current.created_at, "Unknown");
    let updated = format_datetime(current.updated_at, "Never");

    rsx! {
        div { class: "max-w-3xl mx-auto",
            Link { class: "flex items-center text-gray-500 hover:text-gray-700 mb-6", to: Route::NotifyList {}, "← Back to Notifications" }

            div { class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6 space-y-6",
                div { class: "flex items-center justify-between",
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "Notification Details" }
                        p { class: "text-sm text-gray-500", "Created {created} • Updated {updated}" }
                    }
                    Button { variant: ButtonVariant::Danger, onclick: delete, "Delete" }
                }

                TextField {
                    label: Some("Title".to_string()),
                    value: title(),
                    placeholder: "Enter notification title",
                    required: true,
                    oninput: move |value: String| title.set(value),
                }
                TextArea {
                    label: Some("Description".to_string()),
                    value: description(),
                    placeholder: "Enter notification description (optional)",
                    rows: 6,
                    oninput: move |value: String| description.set(value),
                }

                div { class: "flex justify-end",
                    Button { loading: saving(), onclick: save, "Save Changes" }
                }
            }
        }
    }
}
