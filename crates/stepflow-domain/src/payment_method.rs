//! Instrumentos de pago guardados y sus tipos.
//!
//! Los nombres serializados (`CREDIT_CARD`, `COLLECTIVE`, ...) son el
//! contrato con el servicio remoto; no renombrar sin migración.

use serde::{Deserialize, Serialize};

/// Balance mínimo utilizable (unidades menores) para instrumentos con saldo:
/// gift cards y balance de colectivo.
pub const MIN_USABLE_BALANCE: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodType {
    CreditCard,
    Paypal,
    BankTransfer,
    /// Balance de un colectivo (pago colectivo a colectivo, mismo host).
    Collective,
    /// Presupuesto prepago, fijado a un host concreto.
    Prepaid,
    /// Gift card; puede estar limitada a ciertos hosts.
    VirtualCard,
}

/// Instrumento de pago ya guardado por el perfil contribuyente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInstrument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
    /// Balance disponible en unidades menores de la divisa.
    pub balance: i64,
    pub currency: String,
    /// Cuenta dueña del instrumento.
    pub account_id: String,
    /// Hosts a los que el instrumento está limitado (gift cards).
    #[serde(default)]
    pub limited_to_host_ids: Option<Vec<String>>,
    /// Host al que está fijado un prepago.
    #[serde(default)]
    pub pinned_host_id: Option<String>,
}

impl PaymentInstrument {
    /// El instrumento existe pero su saldo no alcanza el mínimo utilizable.
    /// Se aplica uniformemente a todos los instrumentos guardados.
    pub fn below_minimum(&self) -> bool {
        self.balance < MIN_USABLE_BALANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_match_remote_contract() {
        let json = serde_json::to_string(&PaymentMethodType::CreditCard).unwrap();
        assert_eq!(json, "\"CREDIT_CARD\"");
        let back: PaymentMethodType = serde_json::from_str("\"VIRTUAL_CARD\"").unwrap();
        assert_eq!(back, PaymentMethodType::VirtualCard);
    }

    #[test]
    fn below_minimum_is_uniform_over_kinds() {
        let mut pm = PaymentInstrument { id: "pm-1".into(),
                                         name: "balance".into(),
                                         kind: PaymentMethodType::Collective,
                                         balance: MIN_USABLE_BALANCE - 1,
                                         currency: "USD".into(),
                                         account_id: "acc-1".into(),
                                         limited_to_host_ids: None,
                                         pinned_host_id: None };
        assert!(pm.below_minimum());
        pm.balance = MIN_USABLE_BALANCE;
        assert!(!pm.below_minimum());
    }
}
