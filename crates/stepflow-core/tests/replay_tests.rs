//! Paridad entre el estado vivo del motor y el reconstruido por replay del
//! log de eventos.

mod support;

use serde_json::json;
use stepflow_core::{EngineBuilder, WorkflowState};
use support::*;

type Engine = stepflow_core::WorkflowEngine<stepflow_core::InMemoryEventStore, stepflow_core::InMemoryDraftStore>;

fn build_engine() -> Engine {
    let (sink, _, _) = CountingSink::ok();
    EngineBuilder::in_memory().definition(demo_definition())
                              .key(demo_key())
                              .provider(Box::new(StaticProvider(color_reference())))
                              .sink(Box::new(sink))
                              .build()
                              .expect("engine builds")
}

#[tokio::test]
async fn replay_matches_live_state_mid_flow() {
    let mut engine = build_engine();
    engine.set_value("filter", json!("r")).unwrap();
    engine.advance().unwrap();
    engine.refresh_reference().await.unwrap();
    engine.set_value("color", json!("red")).unwrap();
    engine.retreat();

    let instance = engine.instance();
    assert_eq!(instance.cursor, 0);
    assert_eq!(instance.max_visited, 1);
    assert_eq!(instance.values.get("filter"), Some(&json!("r")));
    assert_eq!(instance.values.get("color"), Some(&json!("red")));
    assert!(!instance.submitting);
    assert!(!instance.submitted);
}

#[tokio::test]
async fn replay_reflects_submission_and_resets() {
    let mut engine = build_engine();
    engine.set_value("filter", json!("r")).unwrap();
    engine.advance().unwrap();
    engine.refresh_reference().await.unwrap();
    engine.set_value("color", json!("red")).unwrap();
    // el cambio de filtro reinicia la selección a "blue"
    engine.set_value("filter", json!("b")).unwrap();
    engine.advance().unwrap();
    engine.submit().await.unwrap();

    assert_eq!(engine.state(), WorkflowState::Submitted);
    let instance = engine.instance();
    assert!(instance.submitted);
    assert_eq!(instance.resource_id.as_deref(), Some("resource-1"));
    assert_eq!(instance.values.get("color"), Some(&json!("blue")));
    assert_eq!(instance.cursor, 2);
}
