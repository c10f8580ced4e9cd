//! Sinks de submit en memoria.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stepflow_core::{DraftKey, StepValues, SubmissionSink, TransportError};

/// Sink en memoria: registra cada payload recibido y devuelve un id de
/// recurso secuencial. Clonarlo comparte el registro subyacente.
#[derive(Clone, Default)]
pub struct MemorySink {
    submissions: Arc<Mutex<Vec<(String, StepValues)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de los envíos registrados: (clave de borrador, payload).
    pub fn submissions(&self) -> Vec<(String, StepValues)> {
        self.submissions.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn submit(&self, key: &DraftKey, payload: &StepValues) -> Result<String, TransportError> {
        let mut subs = self.submissions.lock().expect("sink lock");
        subs.push((key.storage_key(), payload.clone()));
        Ok(format!("resource-{}", subs.len()))
    }
}

/// Sink que siempre falla con el mensaje dado; ejercita la fase `Failed` y
/// el reintento.
pub struct FailingSink(pub String);

#[async_trait]
impl SubmissionSink for FailingSink {
    async fn submit(&self, _key: &DraftKey, _payload: &StepValues) -> Result<String, TransportError> {
        Err(TransportError(self.0.clone()))
    }
}
