//! Implementación del `WorkflowEngine`.
//!
//! Una instancia es dueña de todo el estado del asistente (valores, opciones
//! resueltas, fase, último error) y lo muta sólo a través de acciones
//! explícitas. Modelo de ejecución: un único hilo lógico cooperativo; las dos
//! operaciones que suspenden (fetch de referencia y submit) están partidas en
//! begin/apply para que un loop de eventos pueda integrarlas y para que la
//! guarda de respuestas viejas sea comprobable.

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::draft::DraftStore;
use crate::errors::{ResolveError, TransportError, WorkflowError};
use crate::event::{EventStore, WorkflowEventKind};
use crate::external::{Navigator, ReferenceProvider, SubmissionSink};
use crate::model::{DraftKey, OptionSet, StepValues};
use crate::repo::{InMemoryWorkflowRepository, WorkflowDefinition, WorkflowInstance, WorkflowRepository};

/// Vista pública del estado de la máquina.
///
/// `Failed` conserva la semántica del paso final para el usuario: puede
/// reintentar el submit; el error queda disponible vía `last_error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    AtStep(usize),
    Submitting,
    Submitted,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Submitted,
    Failed,
}

/// Motor de un workflow de envío por pasos.
///
/// Responsable de secuenciar pasos, invocar resolvers, persistir el borrador
/// y ejecutar el submit terminal exactamente una vez por acción lógica.
pub struct WorkflowEngine<E, D>
    where E: EventStore,
          D: DraftStore
{
    definition: WorkflowDefinition,
    key: DraftKey,
    workflow_id: Uuid,
    event_store: E,
    draft_store: D,
    provider: Box<dyn ReferenceProvider>,
    sink: Box<dyn SubmissionSink>,
    navigator: Option<Box<dyn Navigator>>,
    redirected: bool,
    phase: Phase,
    cursor: usize,
    max_visited: usize,
    values: StepValues,
    options: HashMap<usize, OptionSet>,
    reference: Option<Value>,
    fetch_epoch: u64,
    last_error: Option<WorkflowError>,
}

impl<E, D> WorkflowEngine<E, D>
    where E: EventStore,
          D: DraftStore
{
    /// Crea un builder para configurar el motor con stores propios.
    pub fn builder(event_store: E, draft_store: D) -> super::EngineBuilder<E, D> {
        super::EngineBuilder::new(event_store, draft_store)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(definition: WorkflowDefinition,
                             key: DraftKey,
                             event_store: E,
                             draft_store: D,
                             provider: Box<dyn ReferenceProvider>,
                             sink: Box<dyn SubmissionSink>,
                             navigator: Option<Box<dyn Navigator>>)
                             -> Self {
        Self { definition,
               key,
               workflow_id: Uuid::new_v4(),
               event_store,
               draft_store,
               provider,
               sink,
               navigator,
               redirected: false,
               phase: Phase::Editing,
               cursor: 0,
               max_visited: 0,
               values: StepValues::new(),
               options: HashMap::new(),
               reference: None,
               fetch_epoch: 0,
               last_error: None }
    }

    /// Inicializa el log y restaura el borrador persistido (pasos
    /// desconocidos en el borrador se ignoran).
    pub(crate) fn init(&mut self) {
        let _ = self.event_store.append_kind(self.workflow_id,
                                             WorkflowEventKind::WorkflowInitialized {
                                                 definition_hash: self.definition.definition_hash.clone(),
                                                 step_count: self.definition.len(),
                                             });
        let stored = self.draft_store.load(&self.key);
        if stored.is_empty() {
            return;
        }
        let mut restored = 0usize;
        for name in self.definition.step_names() {
            if let Some(value) = stored.get(&name) {
                self.values.insert(name, value.clone());
                restored += 1;
            }
        }
        if restored > 0 {
            let _ = self.event_store
                        .append_kind(self.workflow_id, WorkflowEventKind::DraftRestored { step_count: restored });
        }
    }

    // ------------------------------------------------------------------
    // Acciones de usuario
    // ------------------------------------------------------------------

    /// Registra el valor de un paso ya visitado, persiste el borrador y
    /// recalcula las opciones de los pasos aguas abajo que dependen de él.
    ///
    /// Un fallo de resolución durante el recálculo no es un fallo de esta
    /// acción: queda registrado en `last_error` como mensaje bloqueante del
    /// paso afectado.
    pub fn set_value(&mut self, step: &str, value: Value) -> Result<(), WorkflowError> {
        self.begin_action();
        self.ensure_editing()?;
        let index = self.definition
                        .index_of(step)
                        .ok_or_else(|| WorkflowError::UnknownStep(step.to_string()))?;
        if index > self.max_visited {
            return Err(WorkflowError::StepNotVisited);
        }
        // cualquier fetch en vuelo deja de corresponder al estado actual
        self.fetch_epoch += 1;
        self.values.insert(step.to_string(), value.clone());
        self.draft_store.save(&self.key, step, &value);
        let _ = self.event_store.append_kind(self.workflow_id,
                                             WorkflowEventKind::StepValueRecorded { step_index: index,
                                                                                    step_name: step.to_string(),
                                                                                    value });
        self.recompute_options(Some(step.to_string()));
        Ok(())
    }

    /// Avanza al siguiente paso si el actual es válido. Si no lo es, el
    /// cursor no se mueve y el error de validación queda en `last_error`.
    pub fn advance(&mut self) -> Result<usize, WorkflowError> {
        self.begin_action();
        self.ensure_editing()?;
        if self.cursor + 1 >= self.definition.len() {
            return Err(WorkflowError::AtFinalStep);
        }
        if let Err(e) = self.validate_step(self.cursor) {
            self.last_error = Some(e.clone());
            return Err(e);
        }
        let from = self.cursor;
        self.cursor += 1;
        self.max_visited = self.max_visited.max(self.cursor);
        let _ = self.event_store
                    .append_kind(self.workflow_id, WorkflowEventKind::Advanced { from, to: self.cursor });
        Ok(self.cursor)
    }

    /// Retrocede un paso. Incondicional mientras haya paso anterior; en el
    /// primer paso es un no-op. Los valores del paso abandonado se
    /// conservan.
    pub fn retreat(&mut self) -> usize {
        self.begin_action();
        if self.ensure_editing().is_err() || self.cursor == 0 {
            return self.cursor;
        }
        self.fetch_epoch += 1;
        let from = self.cursor;
        self.cursor -= 1;
        let _ = self.event_store
                    .append_kind(self.workflow_id, WorkflowEventKind::Retreated { from, to: self.cursor });
        self.cursor
    }

    /// Salta a un paso ya visitado.
    pub fn jump(&mut self, index: usize) -> Result<(), WorkflowError> {
        self.begin_action();
        self.ensure_editing()?;
        if index >= self.definition.len() {
            return Err(WorkflowError::InvalidDefinition(format!("step index {index} out of range")));
        }
        if index > self.max_visited {
            return Err(WorkflowError::StepNotVisited);
        }
        self.fetch_epoch += 1;
        self.cursor = index;
        let _ = self.event_store
                    .append_kind(self.workflow_id, WorkflowEventKind::Jumped { to: index });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Datos de referencia
    // ------------------------------------------------------------------

    /// Inicia un fetch de referencia y devuelve su token. Toda acción
    /// posterior que cambie el estado invalida el token: la respuesta, al
    /// llegar, se descarta.
    pub fn begin_reference_fetch(&mut self) -> u64 {
        self.fetch_epoch += 1;
        self.fetch_epoch
    }

    /// Aplica el resultado de un fetch iniciado con `begin_reference_fetch`.
    /// Una respuesta con token viejo se descarta sin tocar el estado.
    pub fn apply_reference(&mut self,
                           token: u64,
                           result: Result<Value, TransportError>)
                           -> Result<(), WorkflowError> {
        if token != self.fetch_epoch {
            tracing::debug!(workflow = %self.workflow_id, token, "discarding stale reference response");
            return Ok(());
        }
        match result {
            Ok(snapshot) => {
                self.reference = Some(snapshot);
                self.recompute_options(None);
                Ok(())
            }
            Err(e) => {
                let err = WorkflowError::Transport(e.0);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Conveniencia: fetch + apply contra el proveedor configurado.
    pub async fn refresh_reference(&mut self) -> Result<(), WorkflowError> {
        self.begin_action();
        self.ensure_editing()?;
        let token = self.begin_reference_fetch();
        let result = self.provider.fetch(&self.key.target_id, &self.values).await;
        self.apply_reference(token, result)
    }

    // ------------------------------------------------------------------
    // Submit terminal
    // ------------------------------------------------------------------

    /// Entra a `Submitting` de forma síncrona: valida todos los pasos y
    /// activa la guarda de reentrada antes de cualquier suspensión. Es la
    /// única guarda de concurrencia del sistema.
    pub fn begin_submit(&mut self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Submitting => return Err(WorkflowError::AlreadySubmitting),
            Phase::Submitted => return Err(WorkflowError::AlreadySubmitted),
            _ => {}
        }
        self.begin_action();
        if self.cursor + 1 != self.definition.len() {
            return Err(WorkflowError::NotAtFinalStep);
        }
        for index in 0..self.definition.len() {
            if let Err(e) = self.validate_step(index) {
                self.last_error = Some(e.clone());
                return Err(e);
            }
        }
        self.phase = Phase::Submitting;
        let _ = self.event_store.append_kind(self.workflow_id, WorkflowEventKind::SubmitStarted);
        Ok(())
    }

    /// Aplica el resultado del sink a un submit iniciado con `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<String, TransportError>) -> Result<String, WorkflowError> {
        debug_assert!(matches!(self.phase, Phase::Submitting), "finish_submit requires a submit in flight");
        match result {
            Ok(resource_id) => {
                self.phase = Phase::Submitted;
                let _ = self.event_store
                            .append_kind(self.workflow_id,
                                         WorkflowEventKind::SubmitSucceeded { resource_id: resource_id.clone() });
                self.draft_store.clear(&self.key);
                if !self.redirected {
                    if let Some(nav) = self.navigator.as_mut() {
                        nav.redirect(&resource_id);
                    }
                    self.redirected = true;
                }
                Ok(resource_id)
            }
            Err(e) => {
                self.phase = Phase::Failed;
                let _ = self.event_store
                            .append_kind(self.workflow_id, WorkflowEventKind::SubmitFailed { error: e.0.clone() });
                let err = WorkflowError::Transport(e.0);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Submit terminal: agrega el payload (mapa paso -> valor) y lo entrega
    /// al sink. El borrador se limpia sólo en éxito; en fallo se conserva
    /// para reintento.
    pub async fn submit(&mut self) -> Result<String, WorkflowError> {
        self.begin_submit()?;
        let result = self.sink.submit(&self.key, &self.values).await;
        self.finish_submit(result)
    }

    // ------------------------------------------------------------------
    // Consultas
    // ------------------------------------------------------------------

    pub fn state(&self) -> WorkflowState {
        match self.phase {
            Phase::Editing => WorkflowState::AtStep(self.cursor),
            Phase::Submitting => WorkflowState::Submitting,
            Phase::Submitted => WorkflowState::Submitted,
            Phase::Failed => WorkflowState::Failed,
        }
    }

    pub fn current_step_name(&self) -> &str {
        self.definition.steps[self.cursor].name()
    }

    pub fn value_of(&self, step: &str) -> Option<&Value> {
        self.values.get(step)
    }

    pub fn values(&self) -> &StepValues {
        &self.values
    }

    /// Conjunto de opciones vigente para un paso con resolver, si ya fue
    /// calculado.
    pub fn options_for(&self, step: &str) -> Option<&OptionSet> {
        let index = self.definition.index_of(step)?;
        self.options.get(&index)
    }

    pub fn last_error(&self) -> Option<&WorkflowError> {
        self.last_error.as_ref()
    }

    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    pub fn workflow_id(&self) -> Uuid {
        self.workflow_id
    }

    pub fn definition(&self) -> &WorkflowDefinition {
        &self.definition
    }

    pub fn events(&self) -> Vec<crate::event::WorkflowEvent> {
        self.event_store.list(self.workflow_id)
    }

    /// Estado reconstruido por replay del log; debe coincidir con el estado
    /// vivo del motor.
    pub fn instance(&self) -> WorkflowInstance {
        InMemoryWorkflowRepository::new().load(self.workflow_id, &self.events(), &self.definition)
    }

    // ------------------------------------------------------------------
    // Interno
    // ------------------------------------------------------------------

    /// Toda acción nueva limpia el error mostrado; desde `Failed` se vuelve
    /// a la semántica del paso final.
    fn begin_action(&mut self) {
        self.last_error = None;
        if matches!(self.phase, Phase::Failed) {
            self.phase = Phase::Editing;
        }
    }

    fn ensure_editing(&self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Submitting => Err(WorkflowError::AlreadySubmitting),
            Phase::Submitted => Err(WorkflowError::AlreadySubmitted),
            _ => Ok(()),
        }
    }

    fn validate_step(&self, index: usize) -> Result<(), WorkflowError> {
        let step = &self.definition.steps[index];
        let name = step.name().to_string();
        let value = self.values.get(&name).cloned().unwrap_or(Value::Null);
        step.is_valid(&value)
            .map_err(|message| WorkflowError::Validation { step: name.clone(), message })?;

        if step.resolver().is_some() {
            // La pertenencia al conjunto vigente la impone el orquestador,
            // no el paso: requiere las opciones ya resueltas.
            let set = self.options.get(&index).ok_or(WorkflowError::NoReferenceData)?;
            let key = value.as_str().ok_or_else(|| WorkflowError::Validation {
                          step: name.clone(),
                          message: "a selection is required".to_string(),
                      })?;
            match set.get(key) {
                Some(entry) if !entry.disabled => {}
                Some(_) => {
                    return Err(WorkflowError::Validation { step: name,
                                                           message: "selected option is currently disabled".to_string() })
                }
                None => {
                    return Err(WorkflowError::Validation { step: name,
                                                           message: "selected option is not available".to_string() })
                }
            }
        }
        Ok(())
    }

    /// Recalcula los conjuntos de opciones. Con `changed = Some(paso)` sólo
    /// los pasos que declaran ese paso como dependencia; con `None`, todos
    /// los pasos con resolver. Síncrono: usa el snapshot de referencia en
    /// cache, por lo que el nuevo conjunto queda disponible antes de la
    /// siguiente lectura.
    fn recompute_options(&mut self, changed: Option<String>) {
        let reference = match &self.reference {
            Some(r) => r.clone(),
            None => return,
        };
        let mut outcomes: Vec<(usize, String, Result<OptionSet, ResolveError>)> = Vec::new();
        for (index, step) in self.definition.steps.iter().enumerate() {
            let Some(resolver) = step.resolver() else { continue };
            if let Some(name) = &changed {
                if !step.dependencies().iter().any(|d| d == name) {
                    continue;
                }
            }
            outcomes.push((index, step.name().to_string(), resolver.resolve(&self.values, &reference)));
        }
        for (index, name, outcome) in outcomes {
            self.apply_resolution(index, &name, outcome);
        }
    }

    fn apply_resolution(&mut self, index: usize, name: &str, outcome: Result<OptionSet, ResolveError>) {
        match outcome {
            Ok(set) => {
                let _ = self.event_store.append_kind(self.workflow_id,
                                                     WorkflowEventKind::OptionsResolved { step_index: index,
                                                                                          step_name: name.to_string(),
                                                                                          option_count: set.len() });
                let selected = self.values
                                   .get(name)
                                   .and_then(|v| v.as_str().map(str::to_string));
                if let Some(key) = selected {
                    // nunca retener en silencio una selección inválida
                    if !set.contains(&key) {
                        let new_key = set.first_enabled().map(|e| e.key.clone());
                        self.reset_selection(index, name, new_key);
                    }
                }
                self.options.insert(index, set);
            }
            Err(error) => {
                let _ = self.event_store.append_kind(self.workflow_id,
                                                     WorkflowEventKind::OptionsRejected { step_index: index,
                                                                                          step_name: name.to_string(),
                                                                                          error: error.clone() });
                self.options.remove(&index);
                if self.values.get(name).map(|v| !v.is_null()).unwrap_or(false) {
                    self.reset_selection(index, name, None);
                }
                self.last_error = Some(WorkflowError::Resolution(error));
            }
        }
    }

    fn reset_selection(&mut self, index: usize, name: &str, new_key: Option<String>) {
        let value = new_key.as_ref().map(|k| Value::String(k.clone())).unwrap_or(Value::Null);
        self.values.insert(name.to_string(), value.clone());
        self.draft_store.save(&self.key, name, &value);
        let _ = self.event_store.append_kind(self.workflow_id,
                                             WorkflowEventKind::SelectionReset { step_index: index,
                                                                                 step_name: name.to_string(),
                                                                                 new_key });
    }
}
