//! Demo ejecutable: recorre el flujo de contribución completo contra
//! colaboradores en memoria y un borrador persistido en disco, y termina
//! imprimiendo el log de eventos del workflow.

use serde_json::json;
use stepflow_adapters::{contribution_flow, MemorySink, StaticReferenceProvider};
use stepflow_core::{DraftKey, EngineBuilder, InMemoryEventStore, Navigator};
use stepflow_persistence::FileDraftStore;

struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&mut self, resource_id: &str) {
        tracing::info!(resource_id, "redirecting to the created resource");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
                                                  .add_directive("info".parse()?))
                             .init();

    let reference = json!({
        "host_id": "host-1",
        "supported_methods": ["CREDIT_CARD", "PAYPAL", "BANK_TRANSFER"],
        "instruments": [{ "id": "gc-1", "name": "Gift card", "type": "VIRTUAL_CARD",
                          "balance": 2500, "currency": "USD", "account_id": "acc-1" }],
        "manual_title": "Wire transfer"
    });

    let mut engine = EngineBuilder::new(InMemoryEventStore::new(), FileDraftStore::from_env())
        .definition(contribution_flow()?)
        .key(DraftKey::new("contribution", "babel", "demo-user"))
        .provider(Box::new(StaticReferenceProvider::new(reference)))
        .sink(Box::new(MemorySink::new()))
        .navigator(Box::new(LoggingNavigator))
        .build()?;

    engine.set_value("profile", json!({ "id": "demo-user", "name": "Demo", "type": "INDIVIDUAL" }))?;
    engine.advance()?;
    engine.set_value("details", json!({ "amount": 5000, "currency": "USD", "quantity": 1 }))?;
    engine.advance()?;

    engine.refresh_reference().await?;
    if let Some(set) = engine.options_for("payment") {
        for entry in set.entries() {
            tracing::info!(key = %entry.key, label = %entry.label, disabled = entry.disabled, "payment option");
        }
    }
    engine.set_value("payment", json!("paypal"))?;
    engine.advance()?;

    let resource_id = engine.submit().await?;
    tracing::info!(resource_id, "contribution submitted");

    for event in engine.events() {
        println!("{:>3}  {}", event.seq, serde_json::to_string(&event.kind)?);
    }
    Ok(())
}
