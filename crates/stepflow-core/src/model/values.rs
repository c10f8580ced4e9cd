use indexmap::IndexMap;
use serde_json::Value;

/// Mapa ordenado nombre de paso -> valor opaco. El orden de inserción se
/// conserva: es el payload agregado que recibe el sink al hacer submit.
pub type StepValues = IndexMap<String, Value>;
