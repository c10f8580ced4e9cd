//! Orquestador del workflow: máquina de estados, guardas y recomputación de
//! opciones.

mod builder;
mod core;

pub use builder::EngineBuilder;
pub use core::{WorkflowEngine, WorkflowState};
