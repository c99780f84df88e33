pub mod dashboard;
pub mod menu;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::{Role, RouteTarget};

use dashboard::{AdminDashboard, ClinicianDashboard, PatientDashboard};
use menu::Menu;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Menu {},
    #[route("/patient/:id")]
    PatientDashboard { id: String },
    #[route("/clinician/:id")]
    ClinicianDashboard { id: String },
    #[route("/admin/:id")]
    AdminDashboard { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<RouteTarget> for Route {
    fn from(target: RouteTarget) -> Self {
        let id = target.id;
        match target.role {
            Role::Patient => Route::PatientDashboard { id },
            Role::Clinician => Route::ClinicianDashboard { id },
            Role::Admin => Route::AdminDashboard { id },
        }
    }
}

/// Shared chrome: a header linking back to the menu, then the page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::Menu {}, class: "app-brand", "Mental Health Clinic" }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
