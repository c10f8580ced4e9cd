//! Formulario de gasto (flujo "create expense": form -> summary).

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutMethod {
    BankAccount,
    Paypal,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub description: String,
    /// Unidades menores de la divisa.
    pub amount: i64,
}

/// Valor del paso "form" del flujo de gastos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub payee_id: String,
    pub description: String,
    pub items: Vec<ExpenseItem>,
    pub payout_method: PayoutMethod,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.payee_id.is_empty() {
            return Err(DomainError::ValidationError("payee is required".to_string()));
        }
        if self.items.is_empty() {
            return Err(DomainError::ValidationError("at least one expense item is required".to_string()));
        }
        if let Some(bad) = self.items.iter().find(|it| it.amount <= 0) {
            return Err(DomainError::ValidationError(format!("item '{}' must have a positive amount", bad.description)));
        }
        Ok(())
    }

    pub fn total(&self) -> i64 {
        self.items.iter().map(|it| it.amount).sum()
    }
}
