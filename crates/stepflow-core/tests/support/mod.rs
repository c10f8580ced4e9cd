//! Fixtures compartidas por los tests de integración del motor: un workflow
//! de tres pasos (filter -> color -> review) donde el paso "color" resuelve
//! sus opciones a partir del valor de "filter" y un snapshot de referencia.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use stepflow_core::{build_workflow_definition, DraftKey, DraftStore, InMemoryDraftStore, Navigator, OptionEntry,
                    OptionResolver, OptionSet, ReferenceProvider, ResolveError, StepDefinition, StepHint, StepValues,
                    SubmissionSink, TransportError, WorkflowDefinition};

pub struct FilterStep;

impl StepDefinition for FilterStep {
    fn name(&self) -> &str {
        "filter"
    }
    fn hint(&self) -> StepHint {
        StepHint::Form
    }
    fn is_valid(&self, value: &Value) -> Result<(), String> {
        match value.as_str() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err("a non-empty filter is required".to_string()),
        }
    }
}

pub struct ColorResolver;

impl OptionResolver for ColorResolver {
    fn resolve(&self, values: &StepValues, reference: &Value) -> Result<OptionSet, ResolveError> {
        let prefix = values.get("filter")
                           .and_then(|v| v.as_str())
                           .ok_or_else(|| ResolveError::MissingDependency("filter".to_string()))?;
        let colors = reference.get("colors")
                              .and_then(|c| c.as_array())
                              .ok_or_else(|| ResolveError::MalformedReference("missing colors".to_string()))?;
        let entries: Vec<OptionEntry> =
            colors.iter()
                  .filter_map(|c| {
                      let key = c.get("key")?.as_str()?;
                      let disabled = c.get("disabled").and_then(|d| d.as_bool()).unwrap_or(false);
                      key.starts_with(prefix).then(|| OptionEntry::new(key, key).disabled(disabled))
                  })
                  .collect();
        if entries.is_empty() {
            return Err(ResolveError::NoOptionsAvailable);
        }
        Ok(OptionSet::new(entries))
    }
}

pub struct ColorStep {
    resolver: ColorResolver,
}

impl ColorStep {
    pub fn new() -> Self {
        Self { resolver: ColorResolver }
    }
}

impl StepDefinition for ColorStep {
    fn name(&self) -> &str {
        "color"
    }
    fn dependencies(&self) -> Vec<String> {
        vec!["filter".to_string()]
    }
    fn hint(&self) -> StepHint {
        StepHint::ChoiceList
    }
    fn is_valid(&self, value: &Value) -> Result<(), String> {
        match value.as_str() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err("a selection is required".to_string()),
        }
    }
    fn resolver(&self) -> Option<&dyn OptionResolver> {
        Some(&self.resolver)
    }
}

pub struct ReviewStep;

impl StepDefinition for ReviewStep {
    fn name(&self) -> &str {
        "review"
    }
    fn hint(&self) -> StepHint {
        StepHint::Review
    }
    fn is_valid(&self, _value: &Value) -> Result<(), String> {
        Ok(())
    }
}

pub fn demo_definition() -> WorkflowDefinition {
    build_workflow_definition("demo",
                              vec![Box::new(FilterStep), Box::new(ColorStep::new()), Box::new(ReviewStep)])
        .expect("demo definition builds")
}

pub fn demo_key() -> DraftKey {
    DraftKey::new("demo", "target-1", "user-1")
}

/// Snapshot con tres colores; "ruby" existe pero está deshabilitado.
pub fn color_reference() -> Value {
    json!({
        "colors": [
            { "key": "red" },
            { "key": "ruby", "disabled": true },
            { "key": "blue" },
        ]
    })
}

pub struct StaticProvider(pub Value);

#[async_trait]
impl ReferenceProvider for StaticProvider {
    async fn fetch(&self, _target_id: &str, _values: &StepValues) -> Result<Value, TransportError> {
        Ok(self.0.clone())
    }
}

pub struct FailingProvider;

#[async_trait]
impl ReferenceProvider for FailingProvider {
    async fn fetch(&self, _target_id: &str, _values: &StepValues) -> Result<Value, TransportError> {
        Err(TransportError("reference service unavailable".to_string()))
    }
}

/// Sink que cuenta invocaciones; el flag de fallo es compartido para poder
/// simular un servicio que se recupera entre reintentos.
pub struct CountingSink {
    pub calls: Arc<AtomicUsize>,
    pub fail: Arc<AtomicBool>,
}

impl CountingSink {
    pub fn ok() -> (Self, Arc<AtomicUsize>, Arc<AtomicBool>) {
        Self::with_fail(false)
    }

    pub fn failing() -> (Self, Arc<AtomicUsize>, Arc<AtomicBool>) {
        Self::with_fail(true)
    }

    fn with_fail(fail: bool) -> (Self, Arc<AtomicUsize>, Arc<AtomicBool>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let fail = Arc::new(AtomicBool::new(fail));
        (Self { calls: calls.clone(), fail: fail.clone() }, calls, fail)
    }
}

#[async_trait]
impl SubmissionSink for CountingSink {
    async fn submit(&self, _key: &DraftKey, _payload: &StepValues) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            Err(TransportError("submission rejected".to_string()))
        } else {
            Ok("resource-1".to_string())
        }
    }
}

pub struct RecordingNavigator(pub Arc<Mutex<Vec<String>>>);

impl RecordingNavigator {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (Self(seen.clone()), seen)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&mut self, resource_id: &str) {
        self.0.lock().unwrap().push(resource_id.to_string());
    }
}

/// DraftStore compartible entre el motor y el test (el motor es dueño de su
/// store; el test conserva un handle para inspeccionarlo).
#[derive(Clone)]
pub struct SharedDraftStore(pub Arc<Mutex<InMemoryDraftStore>>);

impl SharedDraftStore {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(InMemoryDraftStore::new())))
    }
}

impl DraftStore for SharedDraftStore {
    fn save(&mut self, key: &DraftKey, step: &str, value: &Value) {
        self.0.lock().unwrap().save(key, step, value);
    }

    fn load(&self, key: &DraftKey) -> StepValues {
        self.0.lock().unwrap().load(key)
    }

    fn clear(&mut self, key: &DraftKey) {
        self.0.lock().unwrap().clear(key);
    }
}
