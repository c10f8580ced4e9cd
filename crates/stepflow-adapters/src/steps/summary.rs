use serde_json::Value;
use stepflow_core::{StepDefinition, StepHint};

/// Paso "summary": revisión final del flujo de contribución. No captura
/// valor propio, así que `Null` es válido; implementa el trait neutro
/// directamente en lugar del adaptador tipado.
pub struct SummaryStep;

impl StepDefinition for SummaryStep {
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
