//! Single support ticket with the admin response form

use super::report_detail::PartyCard;
use crate::app::Route;
use crate::components::{Button, PageLoader, Select, TextArea};
use crate::hooks::{use_remote, use_toast};
use crate::models::{SupportTicketStatus, SupportTicketUpdate};
use crate::services::AdminApi;
use crate::utils::format_datetime;
use dioxus::prelude::*;

#[component]
pub fn SupportDetail(id: String) -> Element {
    let toaster = use_toast();
    let mut status = use_signal(|| SupportTicketStatus::Open);
    let mut response = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let fetch_id = id.clone();
    let ticket = use_remote(move || {
        let id = fetch_id.clone();
        async move { AdminApi::get_support_ticket(&id).await.map(Some) }
    });

    use_effect(move || {
        if let Some(loaded) = ticket.data.read().as_ref() {
            status.set(loaded.status);
            response.set(loaded.admin_response.clone().unwrap_or_default());
        }
    });

    let save = move |_: MouseEvent| {
        let id = id.clone();
        let update = SupportTicketUpdate {
            status: status(),
            admin_response: response(),
        };
        saving.set(true);
        spawn(async move {
            match AdminApi::update_support_ticket(&id, &update).await {
                Ok(_) => {
                    toaster.success("Ticket updated successfully");
                    ticket.refresh();
                }
                Err(error) => {
                    tracing::error!("Failed to update ticket {}: {}", id, error);
                    toaster.error("Failed to update ticket");
                }
            }
            saving.set(false);
        });
    };

    let loaded = ticket.data.read().clone();
    let Some(current) = loaded else {
        if ticket.is_loading() {
            return rsx! { PageLoader { message: "Loading ticket..." } };
        }
        return rsx! {
            div { class: "p-6 text-center",
                h2 { class: "text-xl font-semibold text-gray-800", "Ticket not found" }
                Link { class: "mt-4 inline-block text-purple-600 font-medium", to: Route::Support {}, "Go Back" }
            }
        };
    };

    let created = format_datetime(current.created_at, "Unknown");
    let category = current.category_label();
    let shown_status = status();
    let status_class = shown_status.badge_class();
    let status_label = shown_status.label();
    let description = if current.description.is_empty() {
        "No description provided.".to_string()
    } else {
        current.description.clone()
    };
    let attachments = current.attachment_urls.clone().unwrap_or_default();
    let statuses: Vec<(String, String)> = SupportTicketStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    rsx! {
        div { class: "max-w-5xl mx-auto",
            Link { class: "flex items-center text-gray-500 hover:text-gray-700 mb-6", to: Route::Support {}, "← Back to Support" }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div { class: "lg:col-span-2 space-y-6",
                    div { class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6",
                        div { class: "flex justify-between items-start mb-4",
                            div {
                                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "{current.subject}" }
                                p { class: "text-sm text-gray-500 capitalize", "Created on {created} • {category}" }
                            }
                            span { class: "{status_class}", "{status_label}" }
                        }
                        h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-2", "Description" }
                        p { class: "bg-gray-50 p-4 rounded-lg text-gray-700 whitespace-pre-wrap", "{description}" }

                        if !attachments.is_empty() {
                            div { class: "mt-6",
                                h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-3", "Attachments" }
                                div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                                    for (index, url) in attachments.into_iter().enumerate() {
                                        a { key: "{index}", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                            img { class: "w-full aspect-video object-cover rounded-lg border border-gray-200", src: "{url}", alt: format!("Attachment {}", index + 1) }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6 space-y-4",
                        h2 { class: "text-lg font-bold text-gray-900", "Admin Response" }
                        TextArea {
                            value: response(),
                            placeholder: "Write your response here...",
                            rows: 5,
                            oninput: move |value: String| response.set(value),
                        }
                        div { class: "flex justify-between items-end",
                            Select {
                                label: Some("Update Status".to_string()),
                                value: shown_status.as_str().to_string(),
                                options: statuses,
                                onchange: move |value: String| {
                                    if let Some(parsed) = SupportTicketStatus::parse(&value) {
                                        status.set(parsed);
                                    }
                                },
                            }
                            Button { loading: saving(), onclick: save, "Save Changes" }
                        }
                    }
                }

                div { class: "space-y-6",
                    PartyCard {
                        title: "User Information",
                        name_label: "Full Name",
                        name: current.user_label().to_string(),
                        email: current.user_email.clone(),
                        id_label: "User ID",
                        id: current.user_id.clone(),
                    }
                }
            }
        }
    }
}
