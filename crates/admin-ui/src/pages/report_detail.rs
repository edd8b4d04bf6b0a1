//! Single report review and moderation

use crate::app::Route;
use crate::components::{Button, PageLoader, Select, TextArea};
use crate::hooks::{use_remote, use_toast};
use crate::models::{ReportStatus, ReportUpdate};
use crate::services::AdminApi;
use crate::utils::format_datetime;
use dioxus::prelude::*;

#[component]
pub fn ReportDetail(id: String) -> Element {
    let toaster = use_toast();
    let mut status = use_signal(|| ReportStatus::Pending);
    let mut notes = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let fetch_id = id.clone();
    let report = use_remote(move || {
        let id = fetch_id.clone();
        async move { AdminApi::get_report(&id).await.map(Some) }
    });

    // Reset the form to whatever the backend last returned
    use_effect(move || {
        if let Some(loaded) = report.data.read().as_ref() {
            status.set(loaded.status);
            notes.set(loaded.admin_notes.clone().unwrap_or_default());
        }
    });

    let save = move |_: MouseEvent| {
        let id = id.clone();
        let update = ReportUpdate {
            status: status(),
            admin_notes: notes(),
        };
        saving.set(true);
        spawn(async move {
            match AdminApi::update_report(&id, &update).await {
                Ok(_) => {
                    toaster.success("Report updated successfully");
                    report.refresh();
                }
                Err(error) => {
                    tracing::error!("Failed to update report {}: {}", id, error);
                    toaster.error("Failed to update report");
                }
            }
            saving.set(false);
        });
    };

    let loaded = report.data.read().clone();
    let Some(current) = loaded else {
        if report.is_loading() {
            return rsx! { PageLoader { message: "Loading report..." } };
        }
        return rsx! {
            div { class: "p-6 text-center",
                h2 { class: "text-xl font-semibold text-gray-800", "Report not found" }
                Link { class: "mt-4 inline-block text-purple-600 font-medium", to: Route::Reports {}, "Go Back" }
            }
        };
    };

    let reason = current.reason_label();
    let created = format_datetime(current.created_at, "Unknown");
    let kind = current.kind.label();
    let shown_status = status();
    let status_class = shown_status.badge_class();
    let status_label = shown_status.label();
    let description = if current.description.is_empty() {
        "No description provided.".to_string()
    } else {
        current.description.clone()
    };
    let screenshots = current.screenshot_urls.clone().unwrap_or_default();
    let statuses: Vec<(String, String)> = ReportStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    rsx! {
        div { class: "max-w-5xl mx-auto",
            Link { class: "flex items-center text-gray-500 hover:text-gray-700 mb-6", to: Route::Reports {}, "← Back to Reports" }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div { class: "lg:col-span-2 space-y-6",
                    div { class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6",
                        div { class: "flex justify-between items-start mb-4",
                            div {
                                h1 { class: "text-2xl font-bold text-gray-900 mb-2 capitalize", "{reason}" }
                                p { class: "text-sm text-gray-500", "Created on {created} • {kind} Report" }
                            }
                            span { class: "{status_class}", "{status_label}" }
                        }
                        h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-2", "Description" }
                        p { class: "bg-gray-50 p-4 rounded-lg text-gray-700", "{description}" }

                        if !screenshots.is_empty() {
                            div { class: "mt-6",
                                h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-3", "Proof / Screenshots" }
                                div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                                    for (index, url) in screenshots.into_iter().enumerate() {
                                        a { key: "{index}", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                            img { class: "w-full aspect-video object-cover rounded-lg border border-gray-200", src: "{url}", alt: format!("Screenshot {}", index + 1) }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6 space-y-4",
                        h2 { class: "text-lg font-bold text-gray-900", "Admin Action" }
                        TextArea {
                            value: notes(),
                            placeholder: "Internal notes about this report...",
                            rows: 5,
                            oninput: move |value: String| notes.set(value),
                        }
                        div { class: "flex justify-between items-end",
                            Select {
                                label: Some("Update Status".to_string()),
                                value: shown_status.as_str().to_string(),
                                options: statuses,
                                onchange: move |value: String| {
                                    if let Some(parsed) = ReportStatus::parse(&value) {
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
                        title: "Reporter Information",
                        name: current.reporter_label().to_string(),
                        id_label: "User ID",
                        id: current.reporter_id.clone(),
                    }
                    PartyCard {
                        title: "Target Information",
                        name: current.target_label().to_string(),
                        id_label: "Target ID",
                        id: current.target_id.clone(),
                        kind: Some(kind.to_string()),
                    }
                }
            }
        }
    }
}

/// Side card naming one party of a report or ticket
#[component]
pub(crate) fn PartyCard(
    title: &'static str,
    #[props(default = "Name")] name_label: &'static str,
    name: String,
    id_label: &'static str,
    id: String,
    #[props(default = None)] email: Option<String>,
    #[props(default = None)] kind: Option<String>,
) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl shadow-sm border border-gray-100 p-6 space-y-4",
            h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider", "{title}" }
            if let Some(kind) = kind {
                div {
                    label { class: "text-xs text-gray-400 block", "Target Type" }
                    span { class: "badge mt-1", "{kind}" }
                }
            }
            div {
                label { class: "text-xs text-gray-400 block", "{name_label}" }
                p { class: "font-medium text-gray-900", "{name}" }
            }
            if let Some(email) = email {
                div {
                    label { class: "text-xs text-gray-400 block", "Email" }
                    p { class: "text-sm text-gray-600", "{email}" }
                }
            }
            div {
                label { class: "text-xs text-gray-400 block", "{id_label}" }
                p { class: "text-xs font-mono text-gray-600 bg-gray-50 p-1 rounded mt-1", "{id}" }
            }
        }
    }
}
