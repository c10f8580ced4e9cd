//! Detalles de la contribución: monto, cantidad e intervalo de recurrencia.

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Month,
    Year,
}

/// Paso "details" del flujo de contribución.
///
/// El monto se expresa en unidades menores de la divisa (céntimos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDetails {
    pub amount: i64,
    pub currency: String,
    pub quantity: u32,
    #[serde(default)]
    pub interval: Option<Interval>,
}

impl ContributionDetails {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.amount <= 0 {
            return Err(DomainError::ValidationError("amount must be positive".to_string()));
        }
        if self.quantity == 0 {
            return Err(DomainError::ValidationError("quantity must be at least 1".to_string()));
        }
        if self.currency.len() != 3 {
            return Err(DomainError::ValidationError("currency must be a 3-letter code".to_string()));
        }
        Ok(())
    }

    /// Una contribución recurrente no admite transferencia bancaria manual.
    pub fn is_recurring(&self) -> bool {
        self.interval.is_some()
    }
}
