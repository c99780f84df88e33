use client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{AdminView, Envelope, FetchError, FetchState, PatientView};

use crate::common::*;

// ── Failure reasons surfaced to the dashboards ──────────────────────

#[tokio::test]
async fn not_found_becomes_http_failure() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let result = api.fetch_dashboard::<PatientView>(MISSING_ID).await;
    assert_eq!(result, Err(FetchError::Http { status: 404 }));

    let state = FetchState::from_result(result);
    let reason = state.error().expect("request failed");
    assert!(reason.contains("404"), "reason was {reason}");
}

#[tokio::test]
async fn server_error_ignores_json_body() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let result = api.fetch_dashboard::<AdminView>(FAILING_ID).await;
    assert_eq!(result, Err(FetchError::Http { status: 500 }));
    assert_eq!(
        FetchState::from_result(result).error(),
        Some("HTTP error! status: 500")
    );
}

#[tokio::test]
async fn malformed_body_fails_instead_of_loading() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let result = api.fetch_dashboard::<PatientView>(MALFORMED_ID).await;
    assert!(matches!(result, Err(FetchError::Parse(_))), "got {result:?}");

    let state: FetchState<Envelope<PatientView>> = FetchState::from_result(result);
    assert!(state.loaded().is_none());
    assert!(state.error().unwrap().starts_with("Invalid response body"));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    let api = ApiClient::new(unreachable_base_url().await);

    let result = api.fetch_dashboard::<PatientView>("12345").await;
    assert!(matches!(result, Err(FetchError::Network(_))), "got {result:?}");
    assert!(FetchState::from_result(result)
        .error()
        .unwrap()
        .starts_with("Network error"));
}
