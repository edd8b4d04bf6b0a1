use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-gray-50 text-center px-4",
            h1 { class: "text-6xl font-bold text-gray-300", "404" }
            p { class: "mt-4 text-lg text-gray-700", "Page not found" }
            p { class: "mt-1 text-sm text-gray-500 font-mono", "{path}" }
            Link { class: "mt-6 btn btn-primary", to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
