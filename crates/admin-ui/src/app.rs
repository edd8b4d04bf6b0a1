//! Main application component and route table

use crate::components::AdminLayout;
use crate::config::AppConfig;
use crate::hooks::{use_auth_provider, use_toast_provider};
use crate::pages::*;
use crate::services::init_api_client;
use dioxus::prelude::*;

/// Every page of the admin panel. Pages under `AdminLayout` require a session.
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},

    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/rooms")]
        Rooms {},
        #[route("/used-items")]
        UsedItems {},
        #[route("/notifications")]
        Notifications {},
        #[route("/admins")]
        Admins {},
        #[route("/reports")]
        Reports {},
        #[route("/reports/:id")]
        ReportDetail { id: String },
        #[route("/support")]
        Support {},
        #[route("/support/:id")]
        SupportDetail { id: String },
        #[route("/notify")]
        NotifyList {},
        #[route("/notify/:id")]
        NotifyDetail { id: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_hook(|| init_api_client(&AppConfig::from_env()));
    use_auth_provider();
    use_toast_provider();

    rsx! {
        Router::<Route> {}
    }
}
