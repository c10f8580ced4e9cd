use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{StepDefinition, StepHint};
use crate::resolver::OptionResolver;

/// Interfaz de alto nivel para definir pasos con valor fuertemente tipado.
///
/// Implementadores escriben `validate` contra su tipo concreto; el adaptador
/// de abajo decodifica el `Value` neutro y traduce fallos de decodificación a
/// mensajes de validación.
pub trait TypedStep {
    /// Valor concreto del paso.
    type Value: DeserializeOwned + Serialize + Clone;

    /// Identificador estable del paso dentro del workflow.
    fn name(&self) -> &'static str;

    /// Dependencias aguas arriba (por defecto ninguna).
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    fn hint(&self) -> StepHint;

    /// Validación sobre el valor ya decodificado.
    fn validate(&self, value: &Self::Value) -> Result<(), String>;

    fn resolver(&self) -> Option<&dyn OptionResolver> {
        None
    }
}

// -------------------------------------------------------------
// Adaptador: cualquier `TypedStep` implementa `StepDefinition` neutro.
// -------------------------------------------------------------
impl<T> StepDefinition for T where T: TypedStep
{
    fn name(&self) -> &str {
        <Self as TypedStep>::name(self)
    }

    fn dependencies(&self) -> Vec<String> {
        <Self as TypedStep>::dependencies(self)
    }

    fn hint(&self) -> StepHint {
        <Self as TypedStep>::hint(self)
    }

    fn is_valid(&self, value: &Value) -> Result<(), String> {
        if value.is_null() {
            return Err("no value entered yet".to_string());
        }
        let typed: <Self as TypedStep>::Value =
            serde_json::from_value(value.clone()).map_err(|e| format!("malformed value: {e}"))?;
        self.validate(&typed)
    }

    fn resolver(&self) -> Option<&dyn OptionResolver> {
        <Self as TypedStep>::resolver(self)
    }
}
