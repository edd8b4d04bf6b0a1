//! Layout components for the admin interface
//!
//! This module provides the authenticated shell:
//! - AdminLayout: session guard wrapping the sidebar and routed content
//! - Sidebar: collapsible navigation with the logout control

use crate::app::Route;
use crate::components::feedback::ToastContainer;
use crate::components::loading::PageLoader;
use crate::hooks::use_auth;
use dioxus::prelude::*;

/// Navigation item definition
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

/// Sidebar entries, in display order
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Dashboard", icon: "📊", route: Route::Dashboard {} },
        NavItem { label: "Users", icon: "👥", route: Route::Users {} },
        NavItem { label: "Rooms", icon: "🏠", route: Route::Rooms {} },
        NavItem { label: "Used Items", icon: "📦", route: Route::UsedItems {} },
        NavItem { label: "Notifications", icon: "🔔", route: Route::Notifications {} },
        NavItem { label: "Admins", icon: "🛡️", route: Route::Admins {} },
        NavItem { label: "Reports", icon: "🚩", route: Route::Reports {} },
        NavItem { label: "Support", icon: "💬", route: Route::Support {} },
        NavItem { label: "Notify", icon: "📣", route: Route::NotifyList {} },
    ]
}

/// Whether the item at `target` should be highlighted for `current`.
///
/// The dashboard matches only itself; other sections also match their
/// detail routes (`/reports/42` highlights `/reports`).
pub fn is_active_path(current: &str, target: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Admin layout component with sidebar and routed content
///
/// The session is re-validated on mount and on every route change. Until the
/// first check completes a loader is shown; an invalid session redirects to
/// the login page.
#[component]
pub fn AdminLayout() -> Element {
    let auth_context = use_auth();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut collapsed = use_signal(|| false);
    let mut show_mobile_menu = use_signal(|| false);

    use_effect(use_reactive((&route,), move |(_route,)| {
        auth_context.check_session();
    }));

    use_effect(move || {
        if !auth_context.is_checking() && !auth_context.is_authenticated() {
            navigator.replace(Route::Login {});
        }
    });

    if !auth_context.is_authenticated() {
        return rsx! {
            PageLoader { message: "Checking session..." }
        };
    }

    rsx! {
        div { class: "flex h-screen bg-gray-50 overflow-hidden",
            Sidebar {
                collapsed: collapsed(),
                show_mobile: show_mobile_menu(),
                on_toggle: move |_| collapsed.set(!collapsed()),
                on_close: move |_| show_mobile_menu.set(false),
            }

            main { class: "flex-1 flex flex-col overflow-hidden",
                header { class: "lg:hidden bg-white shadow-sm border-b px-4 py-3",
                    button {
                        class: "p-2 rounded-md text-gray-500 hover:bg-gray-100",
                        onclick: move |_| show_mobile_menu.set(!show_mobile_menu()),
                        "☰"
                    }
                }
                div { class: "flex-1 overflow-auto",
                    div { class: "container mx-auto px-4 sm:px-6 lg:px-8 py-6",
                        Outlet::<Route> {}
                    }
                }
            }

            ToastContainer {}
        }
    }
}

/// Responsive sidebar navigation component
#[component]
pub fn Sidebar(
    collapsed: bool,
    show_mobile: bool,
    on_toggle: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let auth_context = use_auth();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let current_path = route.to_string();
    let admin_name = auth_context.current_admin().map(|admin| admin.name);
    let width = if collapsed { "w-20" } else { "w-64" };
    let position = if show_mobile { "translate-x-0" } else { "-translate-x-full" };

    rsx! {
        if show_mobile {
            div {
                class: "fixed inset-0 z-40 lg:hidden",
                onclick: move |_| on_close.call(()),
                div { class: "fixed inset-0 bg-gray-600 bg-opacity-75" }
            }
        }

        aside {
            class: "fixed inset-y-0 left-0 z-50 {width} bg-white shadow-lg transform transition-all duration-300 ease-in-out lg:translate-x-0 lg:static lg:inset-0 {position}",

            div { class: "flex flex-col h-full",
                div { class: "flex items-center justify-between px-4 py-4 border-b",
                    div { class: "flex items-center",
                        div { class: "w-10 h-10 bg-gradient-to-br from-cyan-500 to-purple-600 rounded-lg flex items-center justify-center shadow-md",
                            span { class: "text-white font-bold text-lg", "H" }
                        }
                        if !collapsed {
                            div { class: "ml-3",
                                p { class: "text-lg font-semibold text-gray-900", "Hello Roomie" }
                                p { class: "text-xs text-gray-500", "Admin Panel" }
                            }
                        }
                    }
                    button {
                        class: "hidden lg:block p-2 rounded-md text-gray-400 hover:text-gray-600 hover:bg-gray-100",
                        title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                        onclick: move |_| on_toggle.call(()),
                        if collapsed { "»" } else { "«" }
                    }
                    button {
                        class: "lg:hidden p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                nav { class: "flex-1 px-3 py-4 space-y-1 overflow-y-auto",
                    for item in nav_items() {
                        NavLink {
                            key: "{item.label}",
                            active: is_active_path(&current_path, &item.route.to_string()),
                            collapsed,
                            item: item.clone(),
                            on_navigate: move |_| on_close.call(()),
                        }
                    }
                }

                div { class: "px-4 py-4 border-t bg-gray-50",
                    if let Some(name) = admin_name {
                        if !collapsed {
                            p { class: "text-sm font-medium text-gray-900 truncate mb-2", "{name}" }
                        }
                    }
                    button {
                        class: "w-full flex items-center px-3 py-2 text-sm font-medium text-red-600 rounded-lg hover:bg-red-50 transition-colors",
                        title: "Logout",
                        onclick: move |_| {
                            auth_context.logout(move || {
                                navigator.replace(Route::Login {});
                            });
                        },
                        span { class: "text-lg mr-3", "🚪" }
                        if !collapsed {
                            span { "Logout" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, active: bool, collapsed: bool, on_navigate: EventHandler<()>) -> Element {
    let state = if active {
        "bg-blue-50 text-blue-700 shadow-sm"
    } else {
        "text-gray-700 hover:bg-gray-50 hover:text-gray-900"
    };

    rsx! {
        Link {
            to: item.route.clone(),
            class: "flex items-center px-3 py-2.5 text-sm font-medium rounded-lg transition-all duration-150 {state}",
            onclick: move |_| on_navigate.call(()),

            span { class: "text-lg mr-3", "{item.icon}" }
            if !collapsed {
                span { "{item.label}" }
            }
            if active && !collapsed {
                span { class: "ml-auto w-1.5 h-1.5 bg-blue-600 rounded-full" }
            }
        }
    }
}
