//! Log de eventos del workflow.
//!
//! Cada acción del motor emite eventos a un `EventStore` append-only; el
//! módulo `repo` reconstruye (`replay`) el estado de una instancia a partir
//! del log sin depender de estructuras mutables.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{WorkflowEvent, WorkflowEventKind};
