//! Contrato infalible del `FileDraftStore`: roundtrip, tolerancia a archivos
//! corruptos y aislamiento entre claves.

use serde_json::json;
use stepflow_core::{DraftKey, DraftStore};
use stepflow_persistence::FileDraftStore;

fn key() -> DraftKey {
    DraftKey::new("contribution", "col-1", "user-9")
}

#[test]
fn save_load_clear_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileDraftStore::new(dir.path());

    store.save(&key(), "details", &json!({ "amount": 500 }));
    store.save(&key(), "profile", &json!({ "id": "u1" }));

    let loaded = store.load(&key());
    assert_eq!(loaded.get("details"), Some(&json!({ "amount": 500 })));
    assert_eq!(loaded.get("profile"), Some(&json!({ "id": "u1" })));

    store.clear(&key());
    assert!(store.load(&key()).is_empty());
    // clear es idempotente
    store.clear(&key());
}

#[test]
fn draft_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileDraftStore::new(dir.path());
        store.save(&key(), "details", &json!(1));
    }
    let store = FileDraftStore::new(dir.path());
    assert_eq!(store.load(&key()).get("details"), Some(&json!(1)));
}

#[test]
fn malformed_file_is_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}.json", key().storage_key()));
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileDraftStore::new(dir.path());
    assert!(store.load(&key()).is_empty());

    // un save posterior reescribe el archivo desde cero
    let mut store = FileDraftStore::new(dir.path());
    store.save(&key(), "details", &json!(2));
    assert_eq!(store.load(&key()).get("details"), Some(&json!(2)));
}

#[test]
fn keys_map_to_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileDraftStore::new(dir.path());
    let other = DraftKey::new("contribution", "col-1", "user-2");

    store.save(&key(), "details", &json!(1));
    assert!(store.load(&other).is_empty());
}
