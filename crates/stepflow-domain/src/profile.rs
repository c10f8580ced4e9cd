//! Perfil con el que el usuario actúa dentro del asistente.

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    Individual,
    Organization,
    Collective,
}

/// Perfil contribuyente elegido en el primer paso del flujo.
///
/// Invariante: un perfil de tipo `Collective` siempre conoce su host fiscal;
/// el resolver de opciones de pago depende de ello para la comparación
/// estructural de hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProfileType,
    #[serde(default)]
    pub host_id: Option<String>,
}

impl ContributorProfile {
    pub fn new(id: &str, name: &str, kind: ProfileType, host_id: Option<&str>) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::ValidationError("profile id must not be empty".to_string()));
        }
        if kind == ProfileType::Collective && host_id.is_none() {
            return Err(DomainError::ValidationError("collective profile requires a host id".to_string()));
        }
        Ok(Self { id: id.to_string(),
                  name: name.to_string(),
                  kind,
                  host_id: host_id.map(str::to_string) })
    }
}
