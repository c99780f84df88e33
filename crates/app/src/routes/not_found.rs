use dioxus::prelude::*;
use shared_types::ALL_ROLES;

use crate::routes::Route;

/// 404 page for anything outside the menu and the three dashboards.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                p { class: "not-found-hint", "Dashboards live at:" }
                ul { class: "not-found-routes",
                    for role in ALL_ROLES.iter() {
                        li { key: "{role}", code { "/{role}/{{id}}" } }
                    }
                }
                Link { to: Route::Menu {},
                    class: "not-found-link",
                    "Back to the menu"
                }
            }
        }
    }
}
