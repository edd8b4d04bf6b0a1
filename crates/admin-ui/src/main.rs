use roomie_admin_ui::{App, config};

fn main() {
    if let Err(error) = dioxus::logger::init(config::log_level()) {
        eprintln!("Logger already initialized: {}", error);
    }

    dioxus::launch(App);
}
