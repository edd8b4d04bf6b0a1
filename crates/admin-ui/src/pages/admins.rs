//! Administrator account management page

use super::common::delete_row;
use crate::app::Route;
use crate::components::{DataTable, ErrorBanner};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::Admin;
use crate::services::AdminApi;
use crate::table::{Column, RowActions, RowKeyStrategy};
use crate::utils::{format_date, format_datetime};
use dioxus::prelude::*;

fn admin_columns() -> Vec<Column<Admin>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("createdAt", "Created At").sortable().render(|admin: &Admin| {
            let created = format_date(admin.created_at, "Unknown");
            rsx! { "{created}" }
        }),
        Column::new("lastLoginAt", "Last Login").sortable().render(|admin: &Admin| {
            let last_login = format_datetime(admin.last_login_at, "Never");
            rsx! { "{last_login}" }
        }),
    ]
}

fn admin_actions(admins: Remote<Vec<Admin>>, toaster: Toaster) -> RowActions<Admin> {
    RowActions::new(move |admin: &Admin| {
        let id = admin.id.clone();

        rsx! {
            div { class: "flex justify-end gap-2",
                button {
                    class: "p-2 rounded-lg text-gray-500 hover:bg-red-50 hover:text-red-600",
                    title: "Delete Admin",
                    onclick: move |_| {
                        let id = id.clone();
                        let target = id.clone();
                        delete_row(
                            admins,
                            toaster,
                            "Admin",
                            move || async move { AdminApi::delete_admin(&id).await },
                            move |admin: &Admin| admin.id == target,
                        );
                    },
                    "🗑"
                }
            }
        }
    })
}

#[component]
pub fn Admins() -> Element {
    let toaster = use_toast();
    let admins = use_remote(AdminApi::get_admins);

    let columns = use_hook(admin_columns);
    let actions = use_hook(|| admin_actions(admins, toaster));

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "🛡 Admin Management" }
                    p { class: "text-sm text-gray-500", "Manage system administrators" }
                }
                Link { class: "btn btn-primary", to: Route::Signup {}, "+ Add New Admin" }
            }

            if admins.error_message().is_some() {
                ErrorBanner {
                    message: "Failed to load admins. Please try again.",
                    on_retry: Some(EventHandler::new(move |_| admins.refresh())),
                }
            }

            div { class: "bg-white shadow rounded-lg p-6",
                DataTable::<Admin> {
                    columns: columns.clone(),
                    data: admins.data.read().clone(),
                    loading: admins.is_loading(),
                    search_placeholder: "Search admins...",
                    actions: Some(actions.clone()),
                    empty_message: "No admins found",
                    row_key: RowKeyStrategy::field("id"),
                }
            }
        }
    }
}
