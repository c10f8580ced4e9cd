use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{WorkflowEvent, WorkflowEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts).
    fn append_kind(&mut self, workflow_id: Uuid, kind: WorkflowEventKind) -> WorkflowEvent;
    /// Lista eventos de una instancia (orden ascendente por seq).
    fn list(&self, workflow_id: Uuid) -> Vec<WorkflowEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<WorkflowEvent>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, workflow_id: Uuid, kind: WorkflowEventKind) -> WorkflowEvent {
        let vec = self.inner.entry(workflow_id).or_default();
        let ev = WorkflowEvent { seq: vec.len() as u64,
                                 workflow_id,
                                 kind,
                                 ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, workflow_id: Uuid) -> Vec<WorkflowEvent> {
        self.inner.get(&workflow_id).cloned().unwrap_or_default()
    }
}
