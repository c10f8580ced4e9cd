//! stepflow-persistence
//!
//! Persistencia del borrador sobre el sistema de archivos: un archivo JSON
//! por clave de borrador. Respeta el contrato infalible de `DraftStore`: los
//! fallos del medio se registran con `tracing` y la sesión continúa con el
//! estado en memoria como fuente de verdad.
//!
//! Módulos:
//! - `file`: `FileDraftStore`, un archivo por clave bajo un directorio raíz.
//! - `config`: carga de configuración desde .env (`STEPFLOW_DRAFT_DIR`).

pub mod config;
pub mod error;
pub mod file;

pub use config::{init_dotenv, DraftDirConfig};
pub use error::PersistenceError;
pub use file::FileDraftStore;
