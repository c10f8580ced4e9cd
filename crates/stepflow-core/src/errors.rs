//! Taxonomía de errores del motor (ver módulo `engine` para la política de
//! propagación: validación y resolución nunca escapan del motor; transporte
//! se adjunta al estado; persistencia se absorbe en el `DraftStore`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo al resolver el conjunto de opciones de un paso.
///
/// `DifferentHost` es estructural: aborta el paso en lugar de degradar a una
/// opción deshabilitada. Los demás casos bloquean el paso hasta que cambie un
/// valor aguas arriba.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ResolveError {
    #[error("profile and target live under different fiscal hosts")] DifferentHost,
    #[error("collective balance is below the usable minimum")] LowBalance,
    #[error("no payment options available")] NoOptionsAvailable,
    #[error("missing dependency value: {0}")] MissingDependency(String),
    #[error("malformed reference data: {0}")] MalformedReference(String),
}

/// Fallo reportado por un colaborador remoto (fetch de referencia o submit).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error, PartialEq, Clone, Serialize, Deserialize)]
pub enum WorkflowError {
    #[error("step '{step}' is invalid: {message}")] Validation { step: String, message: String },
    #[error(transparent)] Resolution(#[from] ResolveError),
    #[error("transport failure: {0}")] Transport(String),
    #[error("a submit is already in flight")] AlreadySubmitting,
    #[error("workflow already submitted")] AlreadySubmitted,
    #[error("submit is only allowed from the final step")] NotAtFinalStep,
    #[error("already at the final step")] AtFinalStep,
    #[error("unknown step: {0}")] UnknownStep(String),
    #[error("cannot edit or jump to a step not yet visited")] StepNotVisited,
    #[error("no reference data available")] NoReferenceData,
    #[error("invalid workflow definition: {0}")] InvalidDefinition(String),
    #[error("internal: {0}")] Internal(String),
}

impl From<TransportError> for WorkflowError {
    fn from(e: TransportError) -> Self {
        WorkflowError::Transport(e.0)
    }
}
