//! In-app notification management page

use super::common::{bool_filter, bool_filter_value, delete_row, non_empty, options};
use super::users::SummaryTile;
use crate::components::{Badge, DataTable, ErrorBanner, Select, TextField};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::{Notification, NotificationFilters, NotificationType};
use crate::services::NotificationsApi;
use crate::table::{Column, RowActions};
use crate::utils::time_ago;
use chrono::Utc;
use dioxus::prelude::*;

fn type_badge(kind: NotificationType) -> &'static str {
    match kind {
        NotificationType::Message => "badge badge-info",
        NotificationType::RoomInquiry => "badge badge-purple",
        NotificationType::RoomUpdate => "badge badge-success",
        NotificationType::System | NotificationType::Unknown => "badge badge-warning",
    }
}

fn notification_columns() -> Vec<Column<Notification>> {
    vec![
        Column::new("title", "Notification").sortable().render(|notification: &Notification| {
            let title_class = if notification.read { "text-gray-600" } else { "font-semibold text-gray-900" };
            rsx! {
                div {
                    p { class: "{title_class}", "{notification.title}" }
                    p { class: "text-sm text-gray-500 truncate max-w-md", "{notification.body}" }
                }
            }
        }),
        Column::new("data.type", "Type").sortable().render(|notification: &Notification| {
            let class = type_badge(notification.data.kind);
            let label = notification.data.kind.label();
            rsx! { Badge { label: label.to_string(), class: class.to_string() } }
        }),
        Column::new("receiverId", "Receiver").render(|notification: &Notification| {
            rsx! { span { class: "text-xs font-mono text-gray-500", "{notification.receiver_id}" } }
        }),
        Column::new("read", "Status").sortable().render(|notification: &Notification| {
            rsx! {
                if notification.read {
                    span { class: "badge", "Read" }
                } else {
                    span { class: "badge badge-danger", "Unread" }
                }
            }
        }),
        Column::new("createdAt", "Sent").sortable().render(|notification: &Notification| {
            let sent = time_ago(notification.created_at, Utc::now());
            rsx! { span { class: "text-xs text-gray-400 whitespace-nowrap", "{sent}" } }
        }),
    ]
}

fn mark_as_read(notifications: Remote<Vec<Notification>>, toaster: Toaster, id: String) {
    spawn(async move {
        match NotificationsApi::mark_as_read(&id).await {
            Ok(updated) => notifications.replace_where(|n| n.id == id, updated),
            Err(error) => {
                tracing::error!("Failed to mark notification {} as read: {}", id, error);
                toaster.admin_error(&error);
            }
        }
    });
}

fn mark_all_as_read(notifications: Remote<Vec<Notification>>, toaster: Toaster, receiver_id: String) {
    spawn(async move {
        match NotificationsApi::mark_all_as_read(&receiver_id).await {
            Ok(response) => {
                let mut data = notifications.data;
                for notification in data.write().iter_mut().filter(|n| n.receiver_id == receiver_id) {
                    notification.read = true;
                }
                toaster.success(format!("Marked {} notifications as read", response.count));
            }
            Err(error) => {
                tracing::error!("Failed to mark notifications of {} as read: {}", receiver_id, error);
                toaster.admin_error(&error);
            }
        }
    });
}

fn notification_actions(notifications: Remote<Vec<Notification>>, toaster: Toaster) -> RowActions<Notification> {
    RowActions::new(move |notification: &Notification| {
        let unread = !notification.read;
        let read_id = notification.id.clone();
        let delete_id = notification.id.clone();

        rsx! {
            div { class: "flex items-center justify-end gap-1",
                if unread {
                    button {
                        class: "p-1.5 rounded-lg text-gray-500 hover:bg-gray-100 hover:text-green-600",
                        title: "Mark as read",
                        onclick: move |_| mark_as_read(notifications, toaster, read_id.clone()),
                        "✓"
                    }
                }
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:bg-red-50 hover:text-red-600",
                    title: "Delete",
                    onclick: move |_| {
                        let id = delete_id.clone();
                        let target = id.clone();
                        delete_row(
                            notifications,
                            toaster,
                            "Notification",
                            move || async move { NotificationsApi::remove_notification(&id).await },
                            move |n: &Notification| n.id == target,
                        );
                    },
                    "🗑"
                }
            }
        }
    })
}

#[component]
pub fn Notifications() -> Element {
    let toaster = use_toast();
    let mut filters = use_signal(NotificationFilters::default);

    let notifications = use_remote(move || {
        let filters = filters();
        async move { NotificationsApi::get_notifications(&filters).await }
    });

    let columns = use_hook(notification_columns);
    let actions = use_hook(|| notification_actions(notifications, toaster));

    let current = filters();
    let kinds: Vec<(String, String)> = NotificationType::all()
        .iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .collect();
    let (total, unread) = {
        let data = notifications.data.read();
        (data.len(), data.iter().filter(|n| !n.read).count())
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-col sm:flex-row sm:items-center justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Notifications" }
                    p { class: "text-sm text-gray-500", "In-app notifications sent to users" }
                }
                if let Some(receiver) = current.receiver_id.clone() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| mark_all_as_read(notifications, toaster, receiver.clone()),
                        "Mark all as read"
                    }
                }
            }

            div { class: "bg-white shadow rounded-lg p-4",
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    TextField {
                        label: Some("Receiver ID".to_string()),
                        value: current.receiver_id.clone().unwrap_or_default(),
                        placeholder: "User uid",
                        oninput: move |value: String| filters.write().receiver_id = non_empty(&value),
                    }
                    Select {
                        label: Some("Type".to_string()),
                        value: current.kind.clone().unwrap_or_default(),
                        options: kinds,
                        empty_option: Some("All Types".to_string()),
                        onchange: move |value: String| filters.write().kind = non_empty(&value),
                    }
                    Select {
                        label: Some("Status".to_string()),
                        value: bool_filter_value(current.read),
                        options: options(&[("false", "Unread"), ("true", "Read")]),
                        empty_option: Some("All".to_string()),
                        onchange: move |value: String| filters.write().read = bool_filter(&value),
                    }
                }
            }

            div { class: "grid grid-cols-3 gap-4",
                SummaryTile { label: "Total", value: total }
                SummaryTile { label: "Unread", value: unread }
                SummaryTile { label: "Read", value: total - unread }
            }

            if let Some(error) = notifications.error_message() {
                ErrorBanner { message: error, on_retry: Some(EventHandler::new(move |_| notifications.refresh())) }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<Notification> {
                    columns: columns.clone(),
                    data: notifications.data.read().clone(),
                    loading: notifications.is_loading(),
                    search_placeholder: "Search notifications...",
                    actions: Some(actions.clone()),
                    empty_message: "No notifications",
                }
            }
        }
    }
}
