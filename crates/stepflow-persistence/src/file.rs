//! `FileDraftStore`: un archivo JSON por clave de borrador.
//!
//! El archivo contiene el mapa paso → valor tal como lo entiende el motor.
//! La escritura es reemplazo completo vía archivo temporal + rename, de modo
//! que un lector nunca observa un borrador a medio escribir.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use stepflow_core::{DraftKey, DraftStore, StepValues};

use crate::error::PersistenceError;

pub struct FileDraftStore {
    root: PathBuf,
}

impl FileDraftStore {
    /// Crea el store sobre `root`. El directorio se crea en el primer `save`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store configurado desde `STEPFLOW_DRAFT_DIR` (ver módulo `config`).
    pub fn from_env() -> Self {
        Self::new(crate::config::DraftDirConfig::from_env().root)
    }

    fn path_for(&self, key: &DraftKey) -> PathBuf {
        self.root.join(format!("{}.json", key.storage_key()))
    }

    fn read_values(path: &Path) -> Result<StepValues, PersistenceError> {
        let raw = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
                                              path: path.display().to_string(),
                                              source,
                                          })?;
        serde_json::from_str(&raw).map_err(|source| PersistenceError::Malformed {
                                      path: path.display().to_string(),
                                      source,
                                  })
    }

    fn write_values(&self, path: &Path, values: &StepValues) -> Result<(), PersistenceError> {
        let io = |source| PersistenceError::Io { path: path.display().to_string(), source };
        fs::create_dir_all(&self.root).map_err(io)?;
        let tmp = path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(values).map_err(|source| PersistenceError::Malformed {
                                                          path: path.display().to_string(),
                                                          source,
                                                      })?;
        fs::write(&tmp, raw).map_err(io)?;
        fs::rename(&tmp, path).map_err(io)?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn save(&mut self, key: &DraftKey, step: &str, value: &Value) {
        let path = self.path_for(key);
        let mut values = match Self::read_values(&path) {
            Ok(v) => v,
            // ausente o ilegible: se parte de un borrador vacío
            Err(_) => StepValues::new(),
        };
        values.insert(step.to_string(), value.clone());
        if let Err(e) = self.write_values(&path, &values) {
            tracing::warn!(key = %key.storage_key(), error = %e, "draft save failed, keeping in-memory state");
        }
    }

    fn load(&self, key: &DraftKey) -> StepValues {
        let path = self.path_for(key);
        if !path.exists() {
            return StepValues::new();
        }
        match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(key = %key.storage_key(), error = %e, "draft load failed, treating as absent");
                StepValues::new()
            }
        }
    }

    fn clear(&mut self, key: &DraftKey) {
        let path = self.path_for(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key = %key.storage_key(), error = %e, "draft clear failed");
            }
        }
    }
}
