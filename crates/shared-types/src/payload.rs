//! Wire models for the three dashboard endpoints.
//!
//! Every field is optional: the backend may omit any part of a payload and
//! the dashboards degrade to blanks and empty sections instead of failing.

use crate::display::{lines, suffix, DashboardView, DisplaySection};
use crate::scalar::{blank_if_absent, Scalar};
use crate::Role;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role-specific body of a dashboard response.
///
/// Implementors describe which endpoint they are served from and how they
/// lay themselves out for display.
pub trait DashboardPayload:
    DeserializeOwned + Serialize + Clone + PartialEq + Default + 'static
{
    const ROLE: Role;

    /// Identifier echoed back by the backend.
    fn identifier(&self) -> String;

    /// Sections in display order.
    fn sections(&self) -> Vec<DisplaySection>;
}

/// Top-level response body: `{ "component": ..., "props": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Name of the component the backend intends the data for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub props: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    pub fn new(props: T) -> Self {
        Self {
            component: None,
            props: Some(props),
        }
    }
}

impl<T: DashboardPayload> Envelope<T> {
    /// Lay the payload out for display. Missing `props` renders the
    /// heading with a blank identifier and empty sections.
    pub fn render(&self) -> DashboardView {
        let fallback = T::default();
        let props = self.props.as_ref().unwrap_or(&fallback);
        DashboardView {
            heading: T::ROLE.dashboard_heading().to_string(),
            id_label: T::ROLE.id_label().to_string(),
            id_value: props.identifier(),
            sections: props.sections(),
        }
    }
}

// ── Patient ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<PatientAppointment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<Symptom>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_plan: Option<TreatmentPlan>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientAppointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Scalar>,
    /// Treating clinician, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Symptom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Scalar>,
    /// When the symptom was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreatmentPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Scalar>>,
}

impl DashboardPayload for PatientView {
    const ROLE: Role = Role::Patient;

    fn identifier(&self) -> String {
        blank_if_absent(&self.patient_id)
    }

    fn sections(&self) -> Vec<DisplaySection> {
        let appointments = lines(&self.appointments, |apt| {
            let mut line = format!(
                "{} - {}",
                blank_if_absent(&apt.date),
                blank_if_absent(&apt.time)
            );
            suffix(&mut line, "With", &apt.doctor);
            line
        });
        let symptoms = lines(&self.symptoms, |s| {
            let mut line = format!(
                "{} - Severity: {}",
                blank_if_absent(&s.name),
                blank_if_absent(&s.severity)
            );
            suffix(&mut line, "Recorded", &s.date);
            line
        });
        let plan = self.treatment_plan.clone().unwrap_or_default();
        let steps = lines(&plan.steps, Scalar::to_string);

        vec![
            DisplaySection::list("Appointments", appointments),
            DisplaySection::list("Symptoms", symptoms),
            DisplaySection::list("Treatment Plan", steps)
                .with_text(blank_if_absent(&plan.description)),
        ]
    }
}

// ── Clinician ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicianView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinician_id: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patients: Option<Vec<PatientSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<ClinicianAppointment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<Alert>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicianAppointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Scalar>,
}

impl DashboardPayload for ClinicianView {
    const ROLE: Role = Role::Clinician;

    fn identifier(&self) -> String {
        blank_if_absent(&self.clinician_id)
    }

    fn sections(&self) -> Vec<DisplaySection> {
        let patients = lines(&self.patients, |p| {
            format!(
                "{} - Last Visit: {}",
                blank_if_absent(&p.name),
                blank_if_absent(&p.last_visit)
            )
        });
        let appointments = lines(&self.appointments, |apt| {
            let mut line = format!(
                "{} - {} - Patient: {}",
                blank_if_absent(&apt.date),
                blank_if_absent(&apt.time),
                blank_if_absent(&apt.patient_name)
            );
            suffix(&mut line, "Reason", &apt.reason);
            line
        });
        let alerts = lines(&self.alerts, |a| {
            format!(
                "{}: {}",
                blank_if_absent(&a.patient_name),
                blank_if_absent(&a.message)
            )
        });

        vec![
            DisplaySection::list("Patients", patients),
            DisplaySection::list("Upcoming Appointments", appointments),
            DisplaySection::list("Alerts", alerts),
        ]
    }
}

// ── Admin ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<Scalar>,
    /// Statistic label to value, in backend order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_stats: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_reports: Option<Vec<ComplianceReport>>,
    /// Staff name to performance record, in backend order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_performance: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplianceReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffPerformance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patients: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<Scalar>,
}

impl StaffPerformance {
    /// Read a performance record out of an arbitrary JSON value.
    /// Anything that is not a matching object yields blank fields.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl AdminView {
    /// Staff performance entries in backend order.
    pub fn staff_entries(&self) -> Vec<(String, StaffPerformance)> {
        self.staff_performance
            .iter()
            .flatten()
            .map(|(name, perf)| (name.clone(), StaffPerformance::from_value(perf)))
            .collect()
    }
}

impl DashboardPayload for AdminView {
    const ROLE: Role = Role::Admin;

    fn identifier(&self) -> String {
        blank_if_absent(&self.admin_id)
    }

    fn sections(&self) -> Vec<DisplaySection> {
        let stats = self
            .clinic_stats
            .iter()
            .flatten()
            .map(|(label, value)| format!("{label}: {}", Scalar(value.clone())))
            .collect();
        let reports = lines(&self.compliance_reports, |r| {
            let mut line = format!(
                "{} - Status: {}",
                blank_if_absent(&r.title),
                blank_if_absent(&r.status)
            );
            suffix(&mut line, "Date", &r.date);
            line
        });
        let staff = self
            .staff_entries()
            .into_iter()
            .map(|(name, perf)| {
                format!(
                    "{name} - Patients: {}, Satisfaction: {}",
                    blank_if_absent(&perf.patients),
                    blank_if_absent(&perf.satisfaction)
                )
            })
            .collect();

        vec![
            DisplaySection::list("Clinic Statistics", stats),
            DisplaySection::list("Compliance Reports", reports),
            DisplaySection::list("Staff Performance", staff),
        ]
    }
}
