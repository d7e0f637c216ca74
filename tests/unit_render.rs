// tests/unit_render.rs
//! Tests for text and JSON rendering of query results.

use socnet_core::model::{Gender, Profile, ProfileId};
use socnet_core::render;
use socnet_core::store::ProfileStore;

fn pid(n: u128) -> ProfileId {
    ProfileId::from_u128(n)
}

fn store_with_cluster() -> ProfileStore {
    let mut store = ProfileStore::new();
    for (n, name) in [(1, "Rita"), (2, "Ana"), (3, "Bea"), (4, "Loner")] {
        store
            .add(Profile::new(pid(n), name, 30, Gender::Female).unwrap())
            .unwrap();
    }
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(2), pid(3), 2));
    store
}

#[test]
fn test_forest_report_counts() {
    let store = store_with_cluster();
    let forest = store.build_cluster(pid(1), 3).unwrap();
    let report = render::forest_report(&store, &forest, pid(1)).unwrap();

    assert_eq!(report.root, pid(1));
    assert_eq!(report.claimed, 2);
    assert_eq!(report.unreached, 1, "Loner is never claimed");
    assert!(report
        .edges
        .iter()
        .any(|e| e.child_name == "Bea" && e.parent_name == "Ana" && e.strength == 2));
}

#[test]
fn test_forest_report_serializes() {
    let store = store_with_cluster();
    let forest = store.build_cluster(pid(1), 3).unwrap();
    let report = render::forest_report(&store, &forest, pid(1)).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"claimed\":2"));
    assert!(json.contains("Rita"));
}

#[test]
fn test_render_forest_lists_reachable_names() {
    let store = store_with_cluster();
    let forest = store.build_cluster(pid(1), 3).unwrap();
    let text = render::render_forest(&store, &forest, pid(1)).unwrap();

    assert!(text.contains("Rita"));
    assert!(text.contains("Ana"));
    assert!(text.contains("Bea"));
    assert!(!text.contains("Loner"), "unreached profiles are not drawn");
    assert!(text.contains("not reached"));
}

#[test]
fn test_suggestion_rows_carry_all_fields() {
    let store = store_with_cluster();
    let suggestions = store
        .suggest_connections(pid(1), None, None, None, None)
        .unwrap();
    let rows = render::suggestion_rows(&suggestions);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bea");
    assert_eq!(rows[0].strength, 5, "first-hop strength, not the second hop");
    assert_eq!(rows[0].age_diff, 0);
    assert_eq!(rows[0].gender, "female");
}

#[test]
fn test_render_suggestions_empty_message() {
    let text = render::render_suggestions(&[]);
    assert!(text.contains("No suggestions"));
}

#[test]
fn test_render_suggestions_numbered_lines() {
    let store = store_with_cluster();
    let suggestions = store
        .suggest_connections(pid(1), None, None, None, None)
        .unwrap();
    let text = render::render_suggestions(&suggestions);

    assert!(text.contains("1."));
    assert!(text.contains("Bea"));
}
