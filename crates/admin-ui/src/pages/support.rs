//! Support ticket queue

use super::common::delete_row;
use crate::app::Route;
use crate::components::{Badge, DataTable, ErrorBanner};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::SupportTicket;
use crate::services::AdminApi;
use crate::table::{Column, RowActions};
use crate::utils::format_date;
use dioxus::prelude::*;
use dioxus::router::Navigator;

fn ticket_columns() -> Vec<Column<SupportTicket>> {
    vec![
        Column::new("subject", "Subject").sortable().render(|ticket: &SupportTicket| {
            rsx! {
                div {
                    p { class: "font-medium text-gray-900", "{ticket.subject}" }
                    p { class: "text-xs text-gray-500 truncate max-w-[200px]", "{ticket.description}" }
                }
            }
        }),
        Column::new("userName", "User").sortable().render(|ticket: &SupportTicket| {
            let user = ticket.user_label().to_string();
            let email = ticket.user_email.clone().unwrap_or_default();
            rsx! {
                div {
                    p { class: "text-sm text-gray-900", "{user}" }
                    p { class: "text-xs text-gray-500", "{email}" }
                }
            }
        }),
        Column::new("category", "Category").sortable().render(|ticket: &SupportTicket| {
            let category = ticket.category_label();
            rsx! { span { class: "text-sm text-gray-600 capitalize", "{category}" } }
        }),
        Column::new("status", "Status").sortable().render(|ticket: &SupportTicket| {
            let class = ticket.status.badge_class();
            let label = ticket.status.label();
            rsx! { Badge { label: label.to_string(), class: class.to_string() } }
        }),
        Column::new("createdAt", "Date").sortable().render(|ticket: &SupportTicket| {
            let date = format_date(ticket.created_at, "Unknown");
            rsx! { span { class: "text-sm text-gray-500", "{date}" } }
        }),
    ]
}

fn ticket_actions(tickets: Remote<Vec<SupportTicket>>, toaster: Toaster, navigator: Navigator) -> RowActions<SupportTicket> {
    RowActions::new(move |ticket: &SupportTicket| {
        let view_id = ticket.id.clone();
        let delete_id = ticket.id.clone();

        rsx! {
            div { class: "flex items-center justify-end gap-1",
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:text-purple-600",
                    title: "View Details",
                    onclick: move |_| {
                        navigator.push(Route::SupportDetail { id: view_id.clone() });
                    },
                    "👁"
                }
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:text-red-600",
                    title: "Delete Ticket",
                    onclick: move |_| {
                        let id = delete_id.clone();
                        let target = id.clone();
                        delete_row(
                            tickets,
                            toaster,
                            "Ticket",
                            move || async move { AdminApi::delete_support_ticket(&id).await },
                            move |ticket: &SupportTicket| ticket.id == target,
                        );
                    },
                    "✕"
                }
            }
        }
    })
}

#[component]
pub fn Support() -> Element {
    let toaster = use_toast();
    let navigator = use_navigator();
    let tickets = use_remote(AdminApi::get_support_tickets);

    let columns = use_hook(ticket_columns);
    let actions = use_hook(|| ticket_actions(tickets, toaster, navigator));
    let total = tickets.data.read().len();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Support Tickets" }
                span { class: "text-sm text-gray-500", "Total Tickets: {total}" }
            }

            if tickets.error_message().is_some() {
                ErrorBanner {
                    message: "Failed to load support tickets",
                    on_retry: Some(EventHandler::new(move |_| tickets.refresh())),
                }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<SupportTicket> {
                    columns: columns.clone(),
                    data: tickets.data.read().clone(),
                    loading: tickets.is_loading(),
                    search_placeholder: "Search tickets...",
                    on_row_click: Some(EventHandler::new(move |ticket: SupportTicket| {
                        navigator.push(Route::SupportDetail { id: ticket.id });
                    })),
                    actions: Some(actions.clone()),
                    empty_message: "No support tickets found",
                }
            }
        }
    }
}
