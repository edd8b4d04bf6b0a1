//! Feedback components: banners, badges, toasts and modal dialogs

use crate::hooks::{ToastEntry, use_toast};
use dioxus::prelude::*;

/// Props for the ErrorBanner component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    /// Error message to display
    #[props(into)]
    pub message: String,
    /// Shows a retry button when set
    #[props(default = None)]
    pub on_retry: Option<EventHandler<()>>,
}

/// Inline error banner for failed loads and rejected forms
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div { class: "rounded-md bg-red-50 border border-red-100 p-4 flex items-center justify-between",
            div { class: "flex items-center",
                span { class: "text-red-500 mr-2", "⚠" }
                span { class: "text-sm font-medium text-red-800", "{props.message}" }
            }
            if let Some(on_retry) = props.on_retry {
                button {
                    class: "text-sm font-medium text-red-700 hover:text-red-900",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

/// Small pill label; `class` carries the colour
#[component]
pub fn Badge(label: String, #[props(default = "badge".to_string())] class: String) -> Element {
    rsx! {
        span { class: "{class}", "{label}" }
    }
}

/// Renders the active toasts of the application toast queue
#[component]
pub fn ToastContainer() -> Element {
    let toaster = use_toast();
    let toasts = toaster.active();

    rsx! {
        div { class: "fixed top-4 right-4 z-50 space-y-2",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: ToastEntry) -> Element {
    let toaster = use_toast();
    let id = toast.id;
    let class = toast.kind.class();

    rsx! {
        div { class: "{class}",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                onclick: move |_| toaster.dismiss(id),
                "×"
            }
        }
    }
}

/// Props for the Modal component
#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    #[props(into)]
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
    /// Optional footer, usually the dialog buttons
    #[props(default = None)]
    pub footer: Option<Element>,
}

/// Centered dialog over a dimmed backdrop; clicking the backdrop closes it
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/60",
            onclick: move |_| on_close.call(()),
            div {
                class: "w-full max-w-2xl bg-white rounded-2xl shadow-2xl max-h-[90vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-center justify-between p-6 border-b",
                    h2 { class: "text-lg font-semibold text-gray-900", "{props.title}" }
                    button {
                        class: "p-2 rounded-md text-gray-400 hover:text-gray-600 hover:bg-gray-100",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "p-6", {props.children} }
                if let Some(footer) = props.footer {
                    div { class: "flex justify-end gap-3 px-6 py-4 border-t bg-gray-50", {footer} }
                }
            }
        }
    }
}

/// Label/value pair inside detail views. Empty values render as "Not set".
#[component]
pub fn DetailField(label: String, value: Option<String>) -> Element {
    let value = value.filter(|v| !v.is_empty());

    rsx! {
        div {
            p { class: "text-xs font-medium text-gray-400 uppercase tracking-wider", "{label}" }
            if let Some(value) = value {
                p { class: "mt-1 text-sm text-gray-900", "{value}" }
            } else {
                p { class: "mt-1 text-sm text-gray-400 italic", "Not set" }
            }
        }
    }
}
