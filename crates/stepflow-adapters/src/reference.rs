use async_trait::async_trait;
use serde_json::Value;
use stepflow_core::{ReferenceProvider, StepValues, TransportError};

/// Proveedor que devuelve siempre el mismo snapshot neutro. Útil para demos
/// y pruebas de integración.
pub struct StaticReferenceProvider {
    snapshot: Value,
}

impl StaticReferenceProvider {
    pub fn new(snapshot: Value) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl ReferenceProvider for StaticReferenceProvider {
    async fn fetch(&self, _target_id: &str, _values: &StepValues) -> Result<Value, TransportError> {
        Ok(self.snapshot.clone())
    }
}
