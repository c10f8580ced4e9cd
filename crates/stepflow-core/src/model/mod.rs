//! Modelo neutro del motor.
//!
//! Los valores de paso viajan como `serde_json::Value` opaco; las vistas
//! tipadas viven en los adaptadores (ver `step::typed`).

mod key;
mod option_set;
mod values;

pub use key::DraftKey;
pub use option_set::{OptionEntry, OptionSet};
pub use values::StepValues;
