//! Persistencia best-effort del borrador en curso.
//!
//! El contrato es deliberadamente infalible: `save` y `clear` no devuelven
//! error y `load` nunca falla (datos mal formados se tratan como ausentes).
//! Las implementaciones registran fallos del medio con `tracing` y siguen;
//! el estado en memoria del motor es la fuente de verdad de la sesión.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::{DraftKey, StepValues};

pub trait DraftStore {
    /// Persiste `value` bajo `(key, step)`. Reemplaza el valor completo del
    /// paso de forma atómica; last-write-wins dentro de una misma clave.
    fn save(&mut self, key: &DraftKey, step: &str, value: &Value);

    /// Mapa completo persistido para la clave, o vacío si no existe.
    fn load(&self, key: &DraftKey) -> StepValues;

    /// Elimina todo lo persistido para la clave. Idempotente.
    fn clear(&mut self, key: &DraftKey);
}

/// Implementación en memoria; también sirve como doble de pruebas.
#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    inner: HashMap<String, StepValues>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn save(&mut self, key: &DraftKey, step: &str, value: &Value) {
        let entry = self.inner.entry(key.storage_key()).or_default();
        entry.insert(step.to_string(), value.clone());
    }

    fn load(&self, key: &DraftKey) -> StepValues {
        self.inner.get(&key.storage_key()).cloned().unwrap_or_default()
    }

    fn clear(&mut self, key: &DraftKey) {
        self.inner.remove(&key.storage_key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_load_clear_roundtrip() {
        let key = DraftKey::new("contribution", "col-1", "user-9");
        let mut store = InMemoryDraftStore::new();
        store.save(&key, "details", &json!({ "amount": 500 }));

        let loaded = store.load(&key);
        assert_eq!(loaded.get("details"), Some(&json!({ "amount": 500 })));

        store.clear(&key);
        assert!(store.load(&key).is_empty());
        // clear es idempotente
        store.clear(&key);
    }

    #[test]
    fn keys_do_not_interfere() {
        let a = DraftKey::new("contribution", "col-1", "user-1");
        let b = DraftKey::new("contribution", "col-1", "user-2");
        let mut store = InMemoryDraftStore::new();
        store.save(&a, "details", &json!(1));
        assert!(store.load(&b).is_empty());
    }
}
