use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

/// Answers 404.
pub const MISSING_ID: &str = "missing";
/// Answers 500 with a JSON error body.
pub const FAILING_ID: &str = "crash";
/// Answers 200 with a truncated JSON body.
pub const MALFORMED_ID: &str = "malformed";
/// Answers 200 with `{"props":{}}`.
pub const EMPTY_ID: &str = "empty";
/// Identifiers with this prefix are answered after `SLOW_DELAY`.
pub const SLOW_PREFIX: &str = "slow-";
pub const SLOW_DELAY: Duration = Duration::from_millis(300);

/// An in-process backend serving the three dashboard endpoints.
pub struct StubBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl StubBackend {
    /// Requests received so far, across all endpoints.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a stub backend on an ephemeral local port.
pub async fn spawn_backend() -> StubBackend {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/patient/{id}", get(patient))
        .route("/api/clinician/{id}", get(clinician))
        .route("/api/admin/{id}", get(admin))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Stub backend stopped");
    });

    StubBackend {
        base_url: format!("http://{addr}"),
        hits,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve a port");
    let addr = listener.local_addr().expect("Reserved port has no address");
    drop(listener);
    format!("http://{addr}")
}

pub fn patient_payload(id: &str) -> Value {
    json!({
        "component": "PatientDashboard",
        "props": {
            "patientId": id,
            "appointments": [{"date": "2024-01-01", "time": "10:00"}],
            "symptoms": [],
            "treatmentPlan": {"description": "CBT weekly"}
        }
    })
}

pub fn clinician_payload(id: &str) -> Value {
    json!({
        "component": "ClinicianDashboard",
        "props": {
            "clinicianId": id,
            "patients": [
                {"name": "Ana Ruiz", "lastVisit": "2024-01-03"},
                {"name": "Ben Okafor", "lastVisit": "2023-12-18"}
            ],
            "appointments": [
                {"date": "2024-01-08", "time": "09:00", "patientName": "Ana Ruiz", "reason": "Check-in"}
            ],
            "alerts": [{"patientName": "Ben Okafor", "message": "PHQ-9 score increased"}]
        }
    })
}

pub fn admin_payload(id: &str) -> Value {
    json!({
        "component": "AdminDashboard",
        "props": {
            "adminId": id,
            "clinicStats": {"totalPatients": 250, "activeClinicians": 12, "averageWaitDays": 3.5},
            "complianceReports": [
                {"title": "HIPAA Audit", "status": "Passed", "date": "2024-01-15"},
                {"title": "Incident Review", "status": "Pending"}
            ],
            "staffPerformance": {
                "Dr. Smith": {"patients": 40, "satisfaction": 4.8},
                "Dr. Adams": {"patients": 32, "satisfaction": 4.6}
            }
        }
    })
}

async fn respond(id: &str, hits: &AtomicUsize, payload: fn(&str) -> Value) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match id {
        MISSING_ID => (StatusCode::NOT_FOUND, "not found").into_response(),
        FAILING_ID => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "database unavailable"})),
        )
            .into_response(),
        MALFORMED_ID => (StatusCode::OK, r#"{"props": {"patientId": "#).into_response(),
        EMPTY_ID => Json(json!({"props": {}})).into_response(),
        _ => {
            if id.starts_with(SLOW_PREFIX) {
                tokio::time::sleep(SLOW_DELAY).await;
            }
            Json(payload(id)).into_response()
        }
    }
}

async fn patient(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>) -> Response {
    respond(&id, &hits, patient_payload).await
}

async fn clinician(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>) -> Response {
    respond(&id, &hits, clinician_payload).await
}

async fn admin(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>) -> Response {
    respond(&id, &hits, admin_payload).await
}
