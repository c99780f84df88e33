use dioxus::prelude::*;
use shared_types::PatientView;

use super::DashboardBody;
use crate::view_state::use_dashboard;

/// Appointments, symptoms and treatment plan for one patient.
#[component]
pub fn PatientDashboard(id: String) -> Element {
    let state = use_dashboard::<PatientView>(id);

    rsx! {
        DashboardBody { state }
    }
}
