//! Carga de configuración desde variables de entorno.
//! Usa convención `STEPFLOW_DRAFT_DIR` con fallback a un directorio local.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct DraftDirConfig {
    pub root: PathBuf,
}

impl DraftDirConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let root = env::var("STEPFLOW_DRAFT_DIR").map(PathBuf::from)
                                                 .unwrap_or_else(|_| PathBuf::from(".stepflow-drafts"));
        Self { root }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
