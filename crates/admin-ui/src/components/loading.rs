//! Loading indicators

use dioxus::prelude::*;

/// Props for the Spinner component
#[derive(Props, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Spinner size (small, medium, large)
    #[props(default = "medium".to_string())]
    pub size: String,
    /// Optional loading message
    #[props(default = None)]
    pub message: Option<String>,
}

/// Spinner loading indicator
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let spinner_class = format!("spinner spinner-{}", props.size);

    rsx! {
        div { class: "spinner-container flex flex-col items-center justify-center py-8",
            div { class: "{spinner_class}" }
            if let Some(message) = &props.message {
                div { class: "spinner-message mt-3 text-sm text-gray-500", "{message}" }
            }
        }
    }
}

/// Spinner centered in the whole viewport
#[component]
pub fn PageLoader(#[props(default = "Loading...".to_string(), into)] message: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-center min-h-screen bg-gray-50",
            Spinner { size: "large".to_string(), message: Some(message) }
        }
    }
}
