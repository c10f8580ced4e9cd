//! Snapshot de datos de referencia provistos por el servicio remoto.
//!
//! El motor los transporta como `serde_json::Value` neutro; este tipo es la
//! vista tipada que consumen los resolvers de opciones.

use serde::{Deserialize, Serialize};

use crate::{DomainError, PaymentInstrument, PaymentMethodType};

/// Hechos del lado servidor necesarios para resolver opciones de un paso:
/// tipos de pago soportados por el host destino, instrumentos guardados del
/// perfil y la identidad del host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    /// Host fiscal del colectivo destino.
    pub host_id: String,
    /// Tipos de pago que el host soporta. Un tipo ausente se excluye del
    /// conjunto de opciones (no se deshabilita).
    pub supported_methods: Vec<PaymentMethodType>,
    /// Instrumentos guardados del perfil actuante, en el orden del servidor.
    pub instruments: Vec<PaymentInstrument>,
    /// Título configurado por el host para la transferencia manual.
    #[serde(default)]
    pub manual_title: Option<String>,
}

impl ReferenceSnapshot {
    pub fn supports(&self, kind: PaymentMethodType) -> bool {
        self.supported_methods.contains(&kind)
    }

    /// Decodifica el snapshot desde el `Value` neutro que maneja el motor.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value.clone()).map_err(DomainError::from)
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("reference snapshot serializes")
    }
}
