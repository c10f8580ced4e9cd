use stepflow_core::{StepHint, TypedStep};
use stepflow_domain::ContributionDetails;

/// Paso "details": monto, cantidad e intervalo de la contribución.
pub struct DetailsStep;

impl TypedStep for DetailsStep {
    type Value = ContributionDetails;

    fn name(&self) -> &'static str {
        "details"
    }

    fn hint(&self) -> StepHint {
        StepHint::Form
    }

    fn validate(&self, value: &Self::Value) -> Result<(), String> {
        value.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stepflow_core::StepDefinition;

    #[test]
    fn rejects_zero_amount_via_the_neutral_interface() {
        let step = DetailsStep;
        let ok = json!({ "amount": 500, "currency": "USD", "quantity": 1 });
        assert!(StepDefinition::is_valid(&step, &ok).is_ok());

        let zero = json!({ "amount": 0, "currency": "USD", "quantity": 1 });
        assert!(StepDefinition::is_valid(&step, &zero).is_err());
    }
}
