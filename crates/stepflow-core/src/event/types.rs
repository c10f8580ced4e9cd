//! Tipos de evento del workflow y estructura `WorkflowEvent`.
//!
//! El enum `WorkflowEventKind` es el contrato observable del motor: permite
//! auditar cada transición del asistente y reconstruir el estado por replay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ResolveError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkflowEventKind {
    /// Primer evento de una instancia: fija el hash de definición y la
    /// cantidad de pasos.
    WorkflowInitialized { definition_hash: String, step_count: usize },
    /// Al construirse el motor se restauraron valores desde el borrador
    /// persistido.
    DraftRestored { step_count: usize },
    /// El usuario registró un valor para un paso.
    StepValueRecorded { step_index: usize, step_name: String, value: Value },
    /// Avance validado al siguiente paso.
    Advanced { from: usize, to: usize },
    /// Retroceso; los valores del paso abandonado se conservan.
    Retreated { from: usize, to: usize },
    /// Salto directo a un paso ya visitado.
    Jumped { to: usize },
    /// El resolver produjo un conjunto de opciones para el paso.
    OptionsResolved { step_index: usize, step_name: String, option_count: usize },
    /// El resolver rechazó el paso (error estructural o sin opciones).
    OptionsRejected { step_index: usize, step_name: String, error: ResolveError },
    /// La selección de un paso aguas abajo dejó de ser válida y fue
    /// reiniciada (`None` = sin opciones habilitadas, queda sin valor).
    SelectionReset { step_index: usize, step_name: String, new_key: Option<String> },
    /// Entrada síncrona al estado `Submitting` (guarda de reentrada).
    SubmitStarted,
    /// El sink confirmó la creación del recurso; el borrador se limpia.
    SubmitSucceeded { resource_id: String },
    /// El sink falló; el borrador se conserva para reintento.
    SubmitFailed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub workflow_id: Uuid,
    pub kind: WorkflowEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en replay
}
