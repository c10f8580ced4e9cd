//! Conjunto ordenado de opciones de un paso.
//!
//! Distinción central del resolver: una opción inelegible pero utilizable se
//! incluye con `disabled = true`; una opción estructuralmente inaplicable no
//! aparece en el conjunto.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Única dentro del conjunto.
    pub key: String,
    pub label: String,
    pub disabled: bool,
    /// Payload arbitrario para el colaborador de render.
    pub metadata: Value,
}

impl OptionEntry {
    pub fn new(key: &str, label: &str) -> Self {
        Self { key: key.to_string(),
               label: label.to_string(),
               disabled: false,
               metadata: Value::Null }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionSet {
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    pub fn new(entries: Vec<OptionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&OptionEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Primera opción habilitada, en el orden del conjunto. Es el destino de
    /// un reset tras invalidarse la selección de un paso aguas abajo.
    pub fn first_enabled(&self) -> Option<&OptionEntry> {
        self.entries.iter().find(|e| !e.disabled)
    }
}
