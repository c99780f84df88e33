use dioxus::prelude::*;
use shared_types::ClinicianView;

use super::DashboardBody;
use crate::view_state::use_dashboard;

/// Caseload, upcoming appointments and alerts for one clinician.
#[component]
pub fn ClinicianDashboard(id: String) -> Element {
    let state = use_dashboard::<ClinicianView>(id);

    rsx! {
        DashboardBody { state }
    }
}
