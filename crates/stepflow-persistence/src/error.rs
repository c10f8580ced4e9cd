use thiserror::Error;

/// Fallos del medio de persistencia. No cruzan el contrato de `DraftStore`
/// (que es infalible); existen para los diagnósticos internos del store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io failure at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed draft file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
