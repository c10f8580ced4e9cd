//! stepflow-adapters: Capa de adaptación Dominio ↔ Core
//!
//! Este crate provee:
//! - Pasos tipados del flujo de contribución (profile → details → payment →
//!   summary) y del flujo de gastos (form → summary).
//! - `PaymentOptionResolver`: la política exacta de exclusión/deshabilitado
//!   de métodos de pago.
//! - Colaboradores en memoria (proveedor de referencia, sinks, navegador)
//!   para integración y pruebas.
//!
//! Nota: el core sólo conoce valores `serde_json::Value` neutros; aquí se
//! decodifican a los tipos de `stepflow-domain`.

pub mod flows;
pub mod nav;
pub mod reference;
pub mod resolver;
pub mod sink;
pub mod steps;

pub use flows::{contribution_flow, expense_flow};
pub use nav::RecordingNavigator;
pub use reference::StaticReferenceProvider;
pub use resolver::PaymentOptionResolver;
pub use sink::{FailingSink, MemorySink};
