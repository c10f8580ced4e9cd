use stepflow_core::{OptionResolver, StepHint, TypedStep};

use crate::resolver::PaymentOptionResolver;

/// Paso "payment": elección dentro del conjunto calculado por el resolver.
///
/// La validación local sólo exige una clave no vacía; la pertenencia al
/// conjunto vigente y el estado habilitado los verifica el motor contra el
/// resultado del resolver.
pub struct PaymentStep {
    resolver: PaymentOptionResolver,
}

impl PaymentStep {
    pub fn new() -> Self {
        Self { resolver: PaymentOptionResolver }
    }
}

impl Default for PaymentStep {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedStep for PaymentStep {
    type Value = String;

    fn name(&self) -> &'static str {
        "payment"
    }

    fn dependencies(&self) -> Vec<String> {
        vec!["profile".to_string(), "details".to_string()]
    }

    fn hint(&self) -> StepHint {
        StepHint::ChoiceList
    }

    fn validate(&self, value: &Self::Value) -> Result<(), String> {
        if value.is_empty() {
            return Err("a payment option must be selected".to_string());
        }
        Ok(())
    }

    fn resolver(&self) -> Option<&dyn OptionResolver> {
        Some(&self.resolver)
    }
}
