//! Clave compuesta de un borrador: (tipo de workflow, entidad destino,
//! usuario actuante). Dos instancias con claves distintas nunca comparten
//! estado persistido.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftKey {
    pub kind: String,
    pub target_id: String,
    pub user_id: String,
}

impl DraftKey {
    pub fn new(kind: &str, target_id: &str, user_id: &str) -> Self {
        Self { kind: kind.to_string(),
               target_id: target_id.to_string(),
               user_id: user_id.to_string() }
    }

    /// Forma textual usada como clave del medio de persistencia.
    pub fn storage_key(&self) -> String {
        format!("{}-{}={}", self.kind, self.target_id, self.user_id)
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}
