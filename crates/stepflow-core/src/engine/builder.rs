//! Builder para `WorkflowEngine`.
//!
//! Obliga a declarar definición, clave de borrador, proveedor de referencia
//! y sink antes de construir; el navegador es opcional (no todo flujo
//! redirige al terminar).

use crate::draft::{DraftStore, InMemoryDraftStore};
use crate::errors::WorkflowError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::external::{Navigator, ReferenceProvider, SubmissionSink};
use crate::model::DraftKey;
use crate::repo::WorkflowDefinition;

use super::WorkflowEngine;

pub struct EngineBuilder<E, D>
    where E: EventStore,
          D: DraftStore
{
    event_store: E,
    draft_store: D,
    definition: Option<WorkflowDefinition>,
    key: Option<DraftKey>,
    provider: Option<Box<dyn ReferenceProvider>>,
    sink: Option<Box<dyn SubmissionSink>>,
    navigator: Option<Box<dyn Navigator>>,
}

impl EngineBuilder<InMemoryEventStore, InMemoryDraftStore> {
    /// Builder con stores en memoria (pruebas y demos).
    pub fn in_memory() -> Self {
        Self::new(InMemoryEventStore::new(), InMemoryDraftStore::new())
    }
}

impl<E, D> EngineBuilder<E, D>
    where E: EventStore,
          D: DraftStore
{
    pub fn new(event_store: E, draft_store: D) -> Self {
        Self { event_store,
               draft_store,
               definition: None,
               key: None,
               provider: None,
               sink: None,
               navigator: None }
    }

    pub fn definition(mut self, definition: WorkflowDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn key(mut self, key: DraftKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn provider(mut self, provider: Box<dyn ReferenceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn sink(mut self, sink: Box<dyn SubmissionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn navigator(mut self, navigator: Box<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Construye el motor, inicializa el log y restaura el borrador.
    pub fn build(self) -> Result<WorkflowEngine<E, D>, WorkflowError> {
        let definition = self.definition
                             .ok_or_else(|| WorkflowError::InvalidDefinition("missing workflow definition".to_string()))?;
        let key = self.key
                      .ok_or_else(|| WorkflowError::InvalidDefinition("missing draft key".to_string()))?;
        let provider = self.provider
                           .ok_or_else(|| WorkflowError::InvalidDefinition("missing reference provider".to_string()))?;
        let sink = self.sink
                       .ok_or_else(|| WorkflowError::InvalidDefinition("missing submission sink".to_string()))?;

        let mut engine =
            WorkflowEngine::from_parts(definition, key, self.event_store, self.draft_store, provider, sink, self.navigator);
        engine.init();
        Ok(engine)
    }
}
