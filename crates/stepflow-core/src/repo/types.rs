//! Tipos de repositorio: definición inmutable (`WorkflowDefinition`) y
//! estado reconstruido por replay (`WorkflowInstance`).
//!
//! El replay es lineal: consume eventos en orden y actualiza la instancia
//! evento a evento. No interpreta opciones ni referencia; sólo la parte del
//! estado que los eventos registran (cursor, valores, fase terminal).

use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::WorkflowError;
use crate::event::{WorkflowEvent, WorkflowEventKind};
use crate::hashing::hash_value;
use crate::model::StepValues;
use crate::step::StepDefinition;

/// Definición inmutable del workflow.
pub struct WorkflowDefinition {
    /// Tipo de workflow ("contribution", "expense", ...); primer componente
    /// de la clave del borrador.
    pub kind: String,
    pub steps: Vec<Box<dyn StepDefinition>>,
    pub definition_hash: String,
}

impl std::fmt::Debug for WorkflowDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowDefinition")
         .field("kind", &self.kind)
         .field("steps", &self.step_names())
         .field("definition_hash", &self.definition_hash)
         .finish()
    }
}

impl WorkflowDefinition {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name() == name)
    }

    pub fn step_names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name().to_string()).collect()
    }
}

/// Construye la definición validando sus invariantes estructurales:
/// nombres únicos y dependencias que apuntan sólo a pasos anteriores (lo que
/// además garantiza aciclicidad).
pub fn build_workflow_definition(kind: &str,
                                 steps: Vec<Box<dyn StepDefinition>>)
                                 -> Result<WorkflowDefinition, WorkflowError> {
    if steps.is_empty() {
        return Err(WorkflowError::InvalidDefinition("workflow needs at least one step".to_string()));
    }
    let mut seen: Vec<&str> = Vec::with_capacity(steps.len());
    for step in &steps {
        if seen.contains(&step.name()) {
            return Err(WorkflowError::InvalidDefinition(format!("duplicate step name '{}'", step.name())));
        }
        for dep in step.dependencies() {
            if !seen.contains(&dep.as_str()) {
                return Err(WorkflowError::InvalidDefinition(format!(
                    "step '{}' depends on '{}' which does not precede it",
                    step.name(),
                    dep
                )));
            }
        }
        seen.push(step.name());
    }

    let names: Vec<&str> = seen;
    let definition_hash = hash_value(&json!({
        "engine_version": crate::constants::ENGINE_VERSION,
        "kind": kind,
        "steps": names,
    }));
    Ok(WorkflowDefinition { kind: kind.to_string(),
                            steps,
                            definition_hash })
}

/// Estado de una instancia reconstruido desde el log de eventos.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowInstance {
    pub id: Uuid,
    pub cursor: usize,
    /// Índice máximo visitado; cota para `jump`.
    pub max_visited: usize,
    pub values: StepValues,
    pub submitting: bool,
    pub submitted: bool,
    pub resource_id: Option<String>,
}

/// Trait para reconstruir el estado de una instancia a partir de eventos.
pub trait WorkflowRepository {
    fn load(&self, workflow_id: Uuid, events: &[WorkflowEvent], definition: &WorkflowDefinition) -> WorkflowInstance;
}

pub struct InMemoryWorkflowRepository;

impl InMemoryWorkflowRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InMemoryWorkflowRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowRepository for InMemoryWorkflowRepository {
    fn load(&self, workflow_id: Uuid, events: &[WorkflowEvent], definition: &WorkflowDefinition) -> WorkflowInstance {
        let mut instance = WorkflowInstance { id: workflow_id,
                                              cursor: 0,
                                              max_visited: 0,
                                              values: StepValues::new(),
                                              submitting: false,
                                              submitted: false,
                                              resource_id: None };
        for ev in events {
            match &ev.kind {
                WorkflowEventKind::WorkflowInitialized { .. } => {}
                WorkflowEventKind::DraftRestored { .. } => {}
                WorkflowEventKind::StepValueRecorded { step_name, value, .. } => {
                    instance.values.insert(step_name.clone(), value.clone());
                }
                WorkflowEventKind::SelectionReset { step_name, new_key, .. } => {
                    let value = new_key.as_ref().map(|k| Value::String(k.clone())).unwrap_or(Value::Null);
                    instance.values.insert(step_name.clone(), value);
                }
                WorkflowEventKind::Advanced { to, .. } | WorkflowEventKind::Jumped { to } => {
                    instance.cursor = (*to).min(definition.len().saturating_sub(1));
                    instance.max_visited = instance.max_visited.max(instance.cursor);
                }
                WorkflowEventKind::Retreated { to, .. } => {
                    instance.cursor = *to;
                }
                WorkflowEventKind::OptionsResolved { .. } | WorkflowEventKind::OptionsRejected { .. } => {}
                WorkflowEventKind::SubmitStarted => instance.submitting = true,
                WorkflowEventKind::SubmitSucceeded { resource_id } => {
                    instance.submitting = false;
                    instance.submitted = true;
                    instance.resource_id = Some(resource_id.clone());
                }
                WorkflowEventKind::SubmitFailed { .. } => instance.submitting = false,
            }
        }
        instance
    }
}
