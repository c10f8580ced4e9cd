//! Pasos del flujo de gastos: form → summary.

use serde_json::Value;
use stepflow_core::{StepDefinition, StepHint, TypedStep};
use stepflow_domain::ExpenseForm;

/// Paso "form": formulario completo del gasto (beneficiario, ítems y método
/// de cobro).
pub struct ExpenseFormStep;

impl TypedStep for ExpenseFormStep {
    type Value = ExpenseForm;

    fn name(&self) -> &'static str {
        "form"
    }

    fn hint(&self) -> StepHint {
        StepHint::Form
    }

    fn validate(&self, value: &Self::Value) -> Result<(), String> {
        value.validate().map_err(|e| e.to_string())
    }
}

/// Revisión final del gasto; sin valor propio.
pub struct ExpenseSummaryStep;

impl StepDefinition for ExpenseSummaryStep {
    fn name(&self) -> &str {
        "summary"
    }

    fn hint(&self) -> StepHint {
        StepHint::Review
    }

    fn is_valid(&self, _value: &Value) -> Result<(), String> {
        Ok(())
    }
}
