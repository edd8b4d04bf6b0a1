//! User management page component

use super::common::{bool_filter, bool_filter_value, delete_row, non_empty, options};
use crate::components::{DataTable, DetailField, ErrorBanner, Modal, Select, TextField};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::{Gender, RoomStatus, User, UserFilters};
use crate::services::UsersApi;
use crate::table::{Column, RowActions, RowKeyStrategy};
use crate::utils::format_datetime;
use dioxus::prelude::*;

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("fullName", "User").sortable().render(|user: &User| {
            let initial = user.initial().to_string();
            let name = user.shown_name().to_string();
            rsx! {
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-full bg-gradient-to-br from-blue-600 to-violet-600 flex items-center justify-center text-white font-medium",
                        "{initial}"
                    }
                    div {
                        p { class: "font-medium text-gray-900", "{name}" }
                        p { class: "text-xs text-gray-400 font-mono", "{user.phone_number}" }
                    }
                }
            }
        }),
        Column::new("city", "Location").sortable(),
        Column::new("gender", "Gender").render(|user: &User| {
            let (label, class) = match user.gender {
                Some(Gender::Male) => ("Male", "badge badge-info"),
                Some(Gender::Female) => ("Female", "badge badge-pink"),
                Some(other) => (other.as_str(), "badge"),
                None => ("Not set", "badge"),
            };
            rsx! { span { class: "{class}", "{label}" } }
        }),
        Column::new("roomStatus", "Status"),
        Column::new("profileCompleted", "Profile").render(|user: &User| {
            let complete = user.profile_completed.unwrap_or(false);
            rsx! {
                span { class: if complete { "text-xs text-green-600" } else { "text-xs text-yellow-600" },
                    if complete { "Complete" } else { "Pending" }
                }
            }
        }),
        Column::new("isActive", "Account").sortable().render(|user: &User| {
            let active = user.is_active();
            rsx! {
                span { class: "flex items-center gap-2 text-sm text-gray-600",
                    span { class: if active { "w-2 h-2 rounded-full bg-green-400" } else { "w-2 h-2 rounded-full bg-gray-300" } }
                    if active { "Active" } else { "Inactive" }
                }
            }
        }),
    ]
}

fn user_actions(users: Remote<Vec<User>>, selected: Signal<Option<User>>, toaster: Toaster) -> RowActions<User> {
    RowActions::new(move |user: &User| {
        let mut selected = selected;
        let viewed = user.clone();
        let uid = user.uid.clone();

        rsx! {
            div { class: "flex items-center justify-end gap-1",
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:bg-gray-100",
                    title: "View details",
                    onclick: move |_| selected.set(Some(viewed.clone())),
                    "👁"
                }
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:bg-red-50 hover:text-red-600",
                    title: "Delete user",
                    onclick: move |_| {
                        delete_user(users, toaster, uid.clone());
                    },
                    "🗑"
                }
            }
        }
    })
}

fn delete_user(users: Remote<Vec<User>>, toaster: Toaster, uid: String) -> bool {
    let target = uid.clone();
    delete_row(
        users,
        toaster,
        "User",
        move || async move { UsersApi::remove_user(&uid).await },
        move |user: &User| user.uid == target,
    )
}

/// User manager component
#[component]
pub fn Users() -> Element {
    let toaster = use_toast();
    let mut filters = use_signal(UserFilters::default);
    let mut show_filters = use_signal(|| false);
    let mut selected = use_signal(|| None::<User>);

    let users = use_remote(move || {
        let filters = filters();
        async move { UsersApi::get_users(&filters).await }
    });

    let columns = use_hook(user_columns);
    let actions = use_hook(|| user_actions(users, selected, toaster));

    let current = filters();
    let (total, active, verified) = {
        let data = users.data.read();
        (
            data.len(),
            data.iter().filter(|user| user.is_active()).count(),
            data.iter().filter(|user| user.profile_completed.unwrap_or(false)).count(),
        )
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-col sm:flex-row sm:items-center justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "User Management" }
                    p { class: "text-sm text-gray-500", "Monitor and manage user accounts" }
                }
                button {
                    class: if show_filters() { "btn btn-secondary active" } else { "btn btn-secondary" },
                    onclick: move |_| show_filters.set(!show_filters()),
                    "Filters"
                }
            }

            if show_filters() {
                div { class: "bg-white shadow rounded-lg p-4",
                    div { class: "flex items-center justify-between mb-4",
                        h3 { class: "font-semibold text-gray-900", "Filters" }
                        button {
                            class: "text-sm text-blue-600 hover:text-blue-500",
                            onclick: move |_| filters.set(UserFilters::default()),
                            "Reset Filters"
                        }
                    }
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4",
                        TextField {
                            label: Some("City".to_string()),
                            value: current.city.clone().unwrap_or_default(),
                            placeholder: "e.g. Mumbai",
                            oninput: move |value: String| filters.write().city = non_empty(&value),
                        }
                        Select {
                            label: Some("Gender".to_string()),
                            value: current.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
                            options: Gender::all().iter().map(|g| (g.as_str().to_string(), g.as_str().to_string())).collect::<Vec<_>>(),
                            empty_option: Some("All Genders".to_string()),
                            onchange: move |value: String| filters.write().gender = Gender::parse(&value),
                        }
                        Select {
                            label: Some("Requirement".to_string()),
                            value: current.room_status.clone().unwrap_or_default(),
                            options: options(&[(RoomStatus::HaveRoom.as_str(), "Has Room"), (RoomStatus::NeedRoom.as_str(), "Needs Room")]),
                            empty_option: Some("All".to_string()),
                            onchange: move |value: String| filters.write().room_status = non_empty(&value),
                        }
                        Select {
                            label: Some("Status".to_string()),
                            value: bool_filter_value(current.is_active),
                            options: options(&[("true", "Active"), ("false", "Inactive")]),
                            empty_option: Some("All Accounts".to_string()),
                            onchange: move |value: String| filters.write().is_active = bool_filter(&value),
                        }
                        Select {
                            label: Some("Profile Status".to_string()),
                            value: bool_filter_value(current.profile_completed),
                            options: options(&[("true", "Completed"), ("false", "Incomplete")]),
                            empty_option: Some("All Profiles".to_string()),
                            onchange: move |value: String| filters.write().profile_completed = bool_filter(&value),
                        }
                    }
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                SummaryTile { label: "Total Users", value: total }
                SummaryTile { label: "Active", value: active }
                SummaryTile { label: "Verified", value: verified }
            }

            if let Some(error) = users.error_message() {
                ErrorBanner { message: error, on_retry: Some(EventHandler::new(move |_| users.refresh())) }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<User> {
                    columns: columns.clone(),
                    data: users.data.read().clone(),
                    loading: users.is_loading(),
                    search_placeholder: "Search by name, phone, or email...",
                    on_row_click: Some(EventHandler::new(move |user: User| selected.set(Some(user)))),
                    actions: Some(actions.clone()),
                    empty_message: "No users found matching your criteria",
                    row_key: RowKeyStrategy::field("uid"),
                }
            }

            if let Some(user) = selected() {
                UserDetailModal {
                    user: user.clone(),
                    on_close: move |_| selected.set(None),
                    on_delete: move |uid: String| {
                        if delete_user(users, toaster, uid) {
                            selected.set(None);
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub(crate) fn SummaryTile(label: &'static str, value: usize) -> Element {
    rsx! {
        div { class: "bg-white shadow rounded-lg p-4",
            p { class: "text-2xl font-bold text-gray-900 mb-1", "{value}" }
            p { class: "text-sm text-gray-500", "{label}" }
        }
    }
}

#[component]
fn UserDetailModal(user: User, on_close: EventHandler<()>, on_delete: EventHandler<String>) -> Element {
    let uid = user.uid.clone();
    let interests = user.interests.as_ref().map(|list| list.join(", "));
    let gender = user.gender.map(|g| g.as_str().to_string());
    let age = user.age.map(|age| age.to_string());
    let joined = format_datetime(user.created_at, "Unknown");
    let last_login = format_datetime(user.last_login, "Never");
    let name = user.shown_name().to_string();

    rsx! {
        Modal {
            title: "User Profile",
            on_close: move |_| on_close.call(()),
            footer: Some(rsx! {
                button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Close" }
                button { class: "btn btn-danger", onclick: move |_| on_delete.call(uid.clone()), "Delete User" }
            }),
            div { class: "space-y-6",
                div {
                    h3 { class: "text-xl font-semibold text-gray-900", "{name}" }
                    p { class: "text-sm text-gray-500 font-mono", "{user.phone_number}" }
                }
                div { class: "grid grid-cols-2 gap-4",
                    DetailField { label: "Email", value: user.email.clone() }
                    DetailField { label: "City", value: user.city.clone() }
                    DetailField { label: "Gender", value: gender }
                    DetailField { label: "Age", value: age }
                    DetailField { label: "Requirement", value: user.room_status.clone() }
                    DetailField { label: "Hometown", value: user.hometown.clone() }
                    DetailField { label: "Work Schedule", value: user.work_schedule.clone() }
                    DetailField { label: "Food Habits", value: user.food_habits.clone() }
                    DetailField { label: "Smoking", value: user.smoking_habits.clone() }
                    DetailField { label: "Drinking", value: user.drinking_habits.clone() }
                    DetailField { label: "Pets", value: user.pets_preference.clone() }
                    DetailField { label: "Interests", value: interests }
                    DetailField { label: "Joined", value: Some(joined) }
                    DetailField { label: "Last Login", value: Some(last_login) }
                }
                if let Some(intro) = user.introduction.clone() {
                    div {
                        p { class: "text-xs font-medium text-gray-400 uppercase tracking-wider", "Introduction" }
                        p { class: "mt-1 text-sm text-gray-700 bg-gray-50 p-3 rounded-lg", "{intro}" }
                    }
                }
            }
        }
    }
}
