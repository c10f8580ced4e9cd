//! Contratos de los colaboradores externos del motor.
//!
//! Exactamente dos operaciones suspenden: el fetch de datos de referencia y
//! el submit terminal. Ambas son asíncronas y pueden fallar con
//! `TransportError`; el motor nunca adivina ante un fallo.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;
use crate::model::{DraftKey, StepValues};

/// Proveedor de datos de referencia (hechos del lado servidor).
#[async_trait]
pub trait ReferenceProvider: Send + Sync {
    /// Devuelve el snapshot neutro para la entidad destino dado el estado
    /// actual de los pasos.
    async fn fetch(&self, target_id: &str, values: &StepValues) -> Result<Value, TransportError>;
}

/// Destino del payload agregado en el submit terminal.
///
/// El motor garantiza a lo sumo una invocación por acción lógica de submit;
/// la idempotencia ante reintentos del llamador es responsabilidad del sink.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Devuelve el identificador del recurso creado.
    async fn submit(&self, key: &DraftKey, payload: &StepValues) -> Result<String, TransportError>;
}

/// Colaborador de navegación: se invoca exactamente una vez tras `Submitted`
/// con el identificador del recurso creado.
pub trait Navigator: Send {
    fn redirect(&mut self, resource_id: &str);
}
