//! Browser tests for the dashboard bindings
//!
//! Run with `wasm-pack test --headless --chrome apps/apokria-web`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use apokria_web::Dashboard;

wasm_bindgen_test_configure!(run_in_browser);

fn reset_storage() {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item("apokria_db_v1")
        .unwrap();
}

#[wasm_bindgen_test]
fn test_first_load_seeds_demo_event() {
    reset_storage();
    let dashboard = Dashboard::new();

    let events: serde_json::Value =
        serde_json::from_str(&dashboard.list_events().unwrap()).unwrap();
    assert_eq!(events[0]["id"], "evt_demo");
    assert_eq!(events[0]["name"], "TechFest 2025");
}

#[wasm_bindgen_test]
fn test_dock_click_toggles_panel() {
    reset_storage();
    let mut dashboard = Dashboard::new();

    assert!(dashboard.launch("events"));
    let windows: serde_json::Value =
        serde_json::from_str(&dashboard.windows_json()).unwrap();
    assert_eq!(windows[0]["id"], "events");
    assert_eq!(windows[0]["minimized"], false);
    assert_eq!(windows[0]["z"], 1000);

    // Second click on the same icon minimizes instead of duplicating
    assert!(dashboard.launch("events"));
    let windows: serde_json::Value =
        serde_json::from_str(&dashboard.windows_json()).unwrap();
    assert_eq!(windows.as_array().unwrap().len(), 1);
    assert_eq!(windows[0]["minimized"], true);
}

#[wasm_bindgen_test]
fn test_unknown_panel_is_rejected() {
    let mut dashboard = Dashboard::new();
    assert!(!dashboard.launch("settings"));
}

#[wasm_bindgen_test]
fn test_events_persist_across_instances() {
    reset_storage();
    let first = Dashboard::new();
    let created: serde_json::Value =
        serde_json::from_str(&first.create_event(r#"{"name":"Open Day"}"#).unwrap()).unwrap();
    let id = created["id"].as_str().unwrap();

    // A second Dashboard reads the same localStorage blob
    let second = Dashboard::new();
    let fetched: serde_json::Value =
        serde_json::from_str(&second.get_event(id).unwrap()).unwrap();
    assert_eq!(fetched["name"], "Open Day");
}

#[wasm_bindgen_test]
fn test_conflict_check_far_future_is_clear() {
    reset_storage();
    let dashboard = Dashboard::new();

    let verdict: serde_json::Value = serde_json::from_str(
        &dashboard
            .check_conflict("2099-01-01T09:00:00Z", "2099-01-01T11:00:00Z", None)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(verdict["status"], "CLEAR");
}

#[wasm_bindgen_test]
fn test_inverted_slot_is_rejected() {
    let dashboard = Dashboard::new();
    assert!(dashboard
        .check_conflict("2099-01-01T11:00:00Z", "2099-01-01T09:00:00Z", None)
        .is_err());
}
