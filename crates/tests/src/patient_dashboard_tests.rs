use client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{Envelope, FetchState, PatientView};

use crate::common::*;

// ── Patient dashboard over HTTP ─────────────────────────────────────

#[tokio::test]
async fn patient_example_loads_and_renders() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let env = api
        .fetch_dashboard::<PatientView>("12345")
        .await
        .expect("patient dashboard loads");
    let expected: Envelope<PatientView> =
        serde_json::from_value(patient_payload("12345")).unwrap();
    assert_eq!(env, expected);
    assert_eq!(env.component.as_deref(), Some("PatientDashboard"));

    let view = env.render();
    assert_eq!(view.heading, "Patient Dashboard");
    assert_eq!(view.id_label, "Patient ID");
    assert_eq!(view.id_value, "12345");
    assert_eq!(
        view.section("Appointments").unwrap().items,
        vec!["2024-01-01 - 10:00".to_string()]
    );
    assert!(view.section("Symptoms").unwrap().is_empty());
    assert_eq!(
        view.section("Treatment Plan").unwrap().text.as_deref(),
        Some("CBT weekly")
    );
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn patient_identifier_travels_as_one_path_segment() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let env = api
        .fetch_dashboard::<PatientView>("a b/c")
        .await
        .expect("encoded identifier is routed");
    assert_eq!(env.render().id_value, "a b/c");
}

#[tokio::test]
async fn patient_empty_props_render_empty_sections() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let state = FetchState::from_result(api.fetch_dashboard::<PatientView>(EMPTY_ID).await)
        .map(Envelope::render);
    let view = state.loaded().expect("empty props still load");
    assert_eq!(view.id_value, "");
    assert_eq!(view.sections.len(), 3);
    assert!(view.section("Appointments").unwrap().is_empty());
    assert!(view.section("Symptoms").unwrap().is_empty());
    assert_eq!(view.section("Treatment Plan").unwrap().text.as_deref(), Some(""));
}
