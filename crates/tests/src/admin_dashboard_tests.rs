use client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::AdminView;

use crate::common::*;

// ── Admin dashboard over HTTP ───────────────────────────────────────

#[tokio::test]
async fn admin_dashboard_renders_stats_reports_and_staff() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let view = api
        .fetch_dashboard::<AdminView>("admin-1")
        .await
        .expect("admin dashboard loads")
        .render();

    assert_eq!(view.heading, "Admin Dashboard");
    assert_eq!(view.id_label, "Admin ID");
    assert_eq!(view.id_value, "admin-1");
    assert_eq!(
        view.section("Compliance Reports").unwrap().items,
        vec![
            "HIPAA Audit - Status: Passed - Date: 2024-01-15".to_string(),
            "Incident Review - Status: Pending".to_string(),
        ]
    );
}

#[tokio::test]
async fn admin_map_sections_keep_backend_order() {
    let backend = spawn_backend().await;
    let api = ApiClient::new(&backend.base_url);

    let env = api.fetch_dashboard::<AdminView>("admin-1").await.unwrap();
    let view = env.render();

    assert_eq!(
        view.section("Clinic Statistics").unwrap().items,
        vec![
            "totalPatients: 250".to_string(),
            "activeClinicians: 12".to_string(),
            "averageWaitDays: 3.5".to_string(),
        ]
    );
    // "Dr. Smith" sorts after "Dr. Adams" but arrives first.
    assert_eq!(
        view.section("Staff Performance").unwrap().items,
        vec![
            "Dr. Smith - Patients: 40, Satisfaction: 4.8".to_string(),
            "Dr. Adams - Patients: 32, Satisfaction: 4.6".to_string(),
        ]
    );
    let names: Vec<_> = env
        .props
        .as_ref()
        .unwrap()
        .staff_entries()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["Dr. Smith", "Dr. Adams"]);
}
