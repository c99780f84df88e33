use dioxus::prelude::*;
use shared_types::AdminView;

use super::DashboardBody;
use crate::view_state::use_dashboard;

/// Clinic statistics, compliance reports and staff performance.
#[component]
pub fn AdminDashboard(id: String) -> Element {
    let state = use_dashboard::<AdminView>(id);

    rsx! {
        DashboardBody { state }
    }
}
