//! Definiciones relacionadas a pasos del workflow.
//!
//! Un paso es una unidad de entrada del asistente. Este módulo define:
//! - `StepDefinition`: interfaz neutral usada por el motor.
//! - `TypedStep`: interfaz de alto nivel (opcional) con valor fuertemente
//!   tipado; un adaptador blanket la convierte a la neutral.
//! - `StepHint`: pista de render opaca para el colaborador de UI.

mod definition;
mod typed;

pub use definition::{StepDefinition, StepHint};
pub use typed::TypedStep;
