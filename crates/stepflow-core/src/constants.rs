//! Constantes del motor.

/// Versión lógica del motor; entra en el hash de definición para invalidar
/// estados reconstruidos entre versiones incompatibles.
pub const ENGINE_VERSION: u32 = 1;
