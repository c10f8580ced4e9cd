//! Resolver de opciones: función pura de (valores de dependencias, datos de
//! referencia) al conjunto de opciones del paso.
//!
//! Contrato de determinismo: mismas entradas producen el mismo conjunto,
//! orden incluido. El motor re-invoca el resolver en cada cambio aguas
//! arriba y compara la selección vigente contra el conjunto recalculado.

use serde_json::Value;

use crate::errors::ResolveError;
use crate::model::{OptionSet, StepValues};

pub trait OptionResolver {
    /// Computa el conjunto de opciones. `values` contiene (al menos) los
    /// valores de las dependencias declaradas por el paso; `reference` es el
    /// snapshot neutro entregado por el proveedor externo.
    fn resolve(&self, values: &StepValues, reference: &Value) -> Result<OptionSet, ResolveError>;
}
