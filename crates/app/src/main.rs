use client::ApiClient;
use dioxus::prelude::*;

mod routes;
mod view_state;

use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // One client for every dashboard, built from the resolved config.
    use_context_provider(|| {
        let config = client::config::load();
        tracing::info!(
            platform = client_platform(),
            base_url = %config.base_url,
            "starting clinic dashboards"
        );
        ApiClient::from_config(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Mental Health Clinic" }
        Router::<Route> {}
    }
}
