//! Broadcast notices: list and create

use super::common::delete_row;
use crate::app::Route;
use crate::components::{Button, ButtonVariant, DataTable, ErrorBanner, Modal, TextArea, TextField};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::{CreateNotify, Notify};
use crate::services::AdminApi;
use crate::table::{Column, RowActions};
use crate::utils::format_datetime;
use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Build the create body; the title is required, the description may be blank
pub(crate) fn notify_form(title: &str, description: &str) -> Result<CreateNotify, &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required");
    }
    Ok(CreateNotify {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
    })
}

fn notify_columns() -> Vec<Column<Notify>> {
    vec![
        Column::new("title", "Title").sortable().render(|notify: &Notify| {
            rsx! { span { class: "font-medium text-gray-900", "{notify.title}" } }
        }),
        Column::new("description", "Description").render(|notify: &Notify| {
            rsx! { p { class: "text-sm text-gray-500 truncate max-w-xs", "{notify.description}" } }
        }),
        Column::new("createdAt", "Created At").sortable().render(|notify: &Notify| {
            let created = format_datetime(notify.created_at, "Unknown");
            rsx! { span { class: "text-sm text-gray-500", "{created}" } }
        }),
    ]
}

fn notify_actions(notices: Remote<Vec<Notify>>, toaster: Toaster, navigator: Navigator) -> RowActions<Notify> {
    RowActions::new(move |notify: &Notify| {
        let view_id = notify.id.clone();
        let delete_id = notify.id.clone();

        rsx! {
            div { class: "flex items-center justify-end gap-1",
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:text-purple-600",
                    title: "View Details",
                    onclick: move |_| {
                        navigator.push(Route::NotifyDetail { id: view_id.clone() });
                    },
                    "👁"
                }
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:text-red-600",
                    title: "Delete",
                    onclick: move |_| {
                        let id = delete_id.clone();
                        let target = id.clone();
                        delete_row(
                            notices,
                            toaster,
                            "Notification",
                            move || async move { AdminApi::delete_notification(&id).await },
                            move |notify: &Notify| notify.id == target,
                        );
                    },
                    "🗑"
                }
            }
        }
    })
}

#[component]
pub fn NotifyList() -> Element {
    let toaster = use_toast();
    let navigator = use_navigator();
    let mut show_create = use_signal(|| false);
    let notices = use_remote(AdminApi::get_notifications);

    let columns = use_hook(notify_columns);
    let actions = use_hook(|| notify_actions(notices, toaster, navigator));

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Notifications" }
                Button { onclick: move |_| show_create.set(true), "+ Create Notification" }
            }

            if notices.error_message().is_some() {
                ErrorBanner {
                    message: "Failed to load notifications",
                    on_retry: Some(EventHandler::new(move |_| notices.refresh())),
                }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<Notify> {
                    columns: columns.clone(),
                    data: notices.data.read().clone(),
                    loading: notices.is_loading(),
                    search_placeholder: "Search notifications...",
                    on_row_click: Some(EventHandler::new(move |notify: Notify| {
                        navigator.push(Route::NotifyDetail { id: notify.id });
                    })),
                    actions: Some(actions.clone()),
                    empty_message: "No notifications found",
                }
            }

            if show_create() {
                CreateNotifyModal {
                    on_close: move |_| show_create.set(false),
                    on_created: move |_| {
                        show_create.set(false);
                        notices.refresh();
                    },
                }
            }
        }
    }
}

#[component]
fn CreateNotifyModal(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let toaster = use_toast();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let create = move |_: MouseEvent| {
        let body = match notify_form(&title.read(), &description.read()) {
            Ok(body) => body,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };
        creating.set(true);
        spawn(async move {
            match AdminApi::create_notification(&body).await {
                Ok(_) => {
                    toaster.success("Notification created successfully");
                    on_created.call(());
                }
                Err(error) => {
                    tracing::error!("Failed to create notification: {}", error);
                    toaster.error("Failed to create notification");
                }
            }
            creating.set(false);
        });
    };

    rsx! {
        Modal {
            title: "Create Notification",
            on_close: move |_| on_close.call(()),
            footer: Some(rsx! {
                Button { variant: ButtonVariant::Secondary, onclick: move |_| on_close.call(()), "Cancel" }
                Button { loading: creating(), loading_label: "Creating...", onclick: create, "Create" }
            }),
            div { class: "space-y-4",
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
                    oninput: move |value: String| description.set(value),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_form_requires_title() {
        assert_eq!(notify_form("   ", "body"), Err("Title is required"));
    }

    #[test]
    fn test_notify_form_allows_blank_description() {
        let body = notify_form(" Maintenance ", "").unwrap();
        assert_eq!(body.title, "Maintenance");
        assert!(body.description.is_empty());
    }
}
