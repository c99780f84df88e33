pub mod admin;
pub mod clinician;
pub mod patient;

pub use admin::AdminDashboard;
pub use clinician::ClinicianDashboard;
pub use patient::PatientDashboard;

use dioxus::prelude::*;
use shared_types::{DashboardView, FetchState};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, ItemList, PageHeader,
    SkeletonLines, StatusMessage, StatusTone,
};

/// Number of placeholder lines shown while a dashboard loads.
const SKELETON_LINES: usize = 4;

/// Renders whichever of the four fetch states a dashboard is in.
#[component]
pub fn DashboardBody(state: FetchState<DashboardView>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            match state {
                FetchState::Idle => rsx! {
                    StatusMessage { "No data available" }
                },
                FetchState::Loading => rsx! {
                    StatusMessage { "Loading..." }
                    SkeletonLines { count: SKELETON_LINES }
                },
                FetchState::Failed(reason) => rsx! {
                    StatusMessage { tone: StatusTone::Error, "Error: {reason}" }
                },
                FetchState::Loaded(view) => rsx! {
                    DashboardDetail { view }
                },
            }
        }
    }
}

/// Heading, identifier and one card per section of a loaded dashboard.
#[component]
pub fn DashboardDetail(view: DashboardView) -> Element {
    rsx! {
        PageHeader { title: view.heading.clone() }

        DetailList {
            DetailItem { label: view.id_label.clone(), value: view.id_value.clone() }
        }

        div { class: "dashboard-sections",
            for section in view.sections.iter() {
                Card { key: "{section.title}",
                    CardHeader {
                        CardTitle { "{section.title}" }
                    }
                    CardContent {
                        if let Some(text) = section.text.as_ref() {
                            p { class: "dashboard-section-text", "{text}" }
                        }
                        // Text-only sections (a plan description) skip the list
                        // unless they also carry items.
                        if section.text.is_none() || !section.items.is_empty() {
                            ItemList { items: section.items.clone() }
                        }
                    }
                }
            }
        }
    }
}
