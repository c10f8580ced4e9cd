use stepflow_core::{StepHint, TypedStep};
use stepflow_domain::{ContributorProfile, ProfileType};

/// Paso "profile": perfil con el que actúa el usuario.
pub struct ProfileStep;

impl TypedStep for ProfileStep {
    type Value = ContributorProfile;

    fn name(&self) -> &'static str {
        "profile"
    }

    fn hint(&self) -> StepHint {
        StepHint::Form
    }

    fn validate(&self, value: &Self::Value) -> Result<(), String> {
        if value.id.is_empty() {
            return Err("profile id must not be empty".to_string());
        }
        if value.kind == ProfileType::Collective && value.host_id.is_none() {
            return Err("collective profile requires a host id".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stepflow_core::StepDefinition;

    #[test]
    fn decodes_and_validates_the_neutral_value() {
        let step = ProfileStep;
        let ok = json!({ "id": "u1", "name": "Ana", "type": "INDIVIDUAL" });
        assert!(StepDefinition::is_valid(&step, &ok).is_ok());

        let collective_without_host = json!({ "id": "c1", "name": "Babel", "type": "COLLECTIVE" });
        assert!(StepDefinition::is_valid(&step, &collective_without_host).is_err());
        assert!(StepDefinition::is_valid(&step, &json!(null)).is_err());
        assert!(StepDefinition::is_valid(&step, &json!(42)).is_err());
    }
}
