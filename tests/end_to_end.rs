//! Integración de los cuatro crates: flujo de contribución con borrador en
//! disco, abandono a mitad de camino y reanudación desde otra instancia.

use serde_json::json;
use stepflow_adapters::{contribution_flow, MemorySink, StaticReferenceProvider};
use stepflow_core::{DraftKey, EngineBuilder, InMemoryEventStore, WorkflowState};
use stepflow_persistence::FileDraftStore;

fn reference() -> serde_json::Value {
    json!({ "host_id": "host-1",
            "supported_methods": ["PAYPAL", "BANK_TRANSFER"],
            "instruments": [] })
}

fn build(dir: &std::path::Path) -> stepflow_core::WorkflowEngine<InMemoryEventStore, FileDraftStore> {
    EngineBuilder::new(InMemoryEventStore::new(), FileDraftStore::new(dir))
        .definition(contribution_flow().unwrap())
        .key(DraftKey::new("contribution", "babel", "user-1"))
        .provider(Box::new(StaticReferenceProvider::new(reference())))
        .sink(Box::new(MemorySink::new()))
        .build()
        .expect("engine builds")
}

#[tokio::test]
async fn abandoned_session_resumes_from_the_disk_draft() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut engine = build(dir.path());
        engine.set_value("profile", json!({ "id": "u1", "name": "Ana", "type": "INDIVIDUAL" }))
              .unwrap();
        engine.advance().unwrap();
        engine.set_value("details", json!({ "amount": 5000, "currency": "USD", "quantity": 1 }))
              .unwrap();
        // la sesión se abandona aquí
    }

    let mut engine = build(dir.path());
    assert_eq!(engine.value_of("profile").and_then(|v| v.get("id")), Some(&json!("u1")));
    assert_eq!(engine.value_of("details").and_then(|v| v.get("amount")), Some(&json!(5000)));

    // el cursor no se persiste: la sesión nueva arranca en el primer paso
    assert_eq!(engine.state(), WorkflowState::AtStep(0));
    engine.advance().unwrap();
    engine.advance().unwrap();
    engine.refresh_reference().await.unwrap();
    engine.set_value("payment", json!("paypal")).unwrap();
    engine.advance().unwrap();
    engine.submit().await.unwrap();

    assert_eq!(engine.state(), WorkflowState::Submitted);
    // el submit exitoso limpió el borrador en disco
    let fresh = build(dir.path());
    assert_eq!(fresh.value_of("profile"), None);
}
