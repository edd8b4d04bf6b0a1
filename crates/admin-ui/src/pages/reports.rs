//! Abuse report queue

use super::common::delete_row;
use crate::app::Route;
use crate::components::{Badge, DataTable, ErrorBanner};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::Report;
use crate::services::AdminApi;
use crate::table::{Column, RowActions};
use crate::utils::format_date;
use dioxus::prelude::*;
use dioxus::router::Navigator;

fn report_columns() -> Vec<Column<Report>> {
    vec![
        Column::new("reason", "Reason").sortable().render(|report: &Report| {
            let reason = report.reason_label();
            rsx! {
                div {
                    p { class: "font-medium text-gray-900 capitalize", "{reason}" }
                    if !report.description.is_empty() {
                        p { class: "text-xs text-gray-500 truncate max-w-[150px]", "{report.description}" }
                    }
                }
            }
        }),
        Column::new("type", "Type").sortable().render(|report: &Report| {
            let class = report.kind.badge_class();
            let label = report.kind.label();
            rsx! { Badge { label: label.to_string(), class: class.to_string() } }
        }),
        Column::new("targetName", "Target").render(|report: &Report| {
            let target = report.target_label().to_string();
            rsx! {
                div {
                    p { class: "text-sm text-gray-900", "{target}" }
                    p { class: "text-xs font-mono text-gray-500 truncate max-w-[100px]", "{report.target_id}" }
                }
            }
        }),
        Column::new("reporterName", "Reporter").render(|report: &Report| {
            let reporter = report.reporter_label().to_string();
            rsx! { span { class: "text-sm text-gray-900", "{reporter}" } }
        }),
        Column::new("status", "Status").sortable().render(|report: &Report| {
            let class = report.status.badge_class();
            let label = report.status.label();
            rsx! { Badge { label: label.to_string(), class: class.to_string() } }
        }),
        Column::new("createdAt", "Date").sortable().render(|report: &Report| {
            let date = format_date(report.created_at, "Unknown");
            rsx! { span { class: "text-sm text-gray-500", "{date}" } }
        }),
    ]
}

fn report_actions(reports: Remote<Vec<Report>>, toaster: Toaster, navigator: Navigator) -> RowActions<Report> {
    RowActions::new(move |report: &Report| {
        let view_id = report.id.clone();
        let delete_id = report.id.clone();

        rsx! {
            div { class: "flex items-center justify-end gap-1",
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:text-purple-600",
                    title: "View Details",
                    onclick: move |_| {
                        navigator.push(Route::ReportDetail { id: view_id.clone() });
                    },
                    "👁"
                }
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:text-red-600",
                    title: "Delete Report",
                    onclick: move |_| {
                        let id = delete_id.clone();
                        let target = id.clone();
                        delete_row(
                            reports,
                            toaster,
                            "Report",
                            move || async move { AdminApi::delete_report(&id).await },
                            move |report: &Report| report.id == target,
                        );
                    },
                    "✕"
                }
            }
        }
    })
}

#[component]
pub fn Reports() -> Element {
    let toaster = use_toast();
    let navigator = use_navigator();
    let reports = use_remote(AdminApi::get_reports);

    let columns = use_hook(report_columns);
    let actions = use_hook(|| report_actions(reports, toaster, navigator));
    let total = reports.data.read().len();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Reports" }
                span { class: "text-sm text-gray-500", "Total Reports: {total}" }
            }

            if reports.error_message().is_some() {
                ErrorBanner {
                    message: "Failed to load reports",
                    on_retry: Some(EventHandler::new(move |_| reports.refresh())),
                }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<Report> {
                    columns: columns.clone(),
                    data: reports.data.read().clone(),
                    loading: reports.is_loading(),
                    search_placeholder: "Search reports...",
                    on_row_click: Some(EventHandler::new(move |report: Report| {
                        navigator.push(Route::ReportDetail { id: report.id });
                    })),
                    actions: Some(actions.clone()),
                    empty_message: "No reports found",
                }
            }
        }
    }
}
