use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolver::OptionResolver;

/// Pista de render. El motor la transporta sin interpretarla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepHint {
    Form,
    ChoiceList,
    Review,
}

/// Trait que define un paso. La validación debe ser local al valor: sin IO y
/// sin leer estado de otros pasos (las dependencias se consumen vía el
/// resolver de opciones, nunca aquí).
pub trait StepDefinition {
    /// Identificador estable y único dentro del workflow.
    fn name(&self) -> &str;

    /// Pasos anteriores cuyos valores alimentan el resolver de este paso.
    /// Deben preceder a este paso en el orden configurado.
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    /// Pista de render opaca.
    fn hint(&self) -> StepHint;

    /// Validación local del valor actual (`Value::Null` = aún sin valor).
    /// `Err` lleva el mensaje de guía que se muestra en línea.
    fn is_valid(&self, value: &Value) -> Result<(), String>;

    /// Resolver de opciones, si el paso presenta un conjunto de elecciones.
    fn resolver(&self) -> Option<&dyn OptionResolver> {
        None
    }
}
