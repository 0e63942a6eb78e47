use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named validation configuration.
///
/// Links an expectation suite to a batch definition under a unique name.
/// Both linked ids are opaque foreign identifiers; this record does not own
/// the entities they point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Unique name within a store.
    pub name: String,

    /// Identity of this config, if one has been assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// The expectation suite this config runs.
    pub expectation_suite_id: Uuid,

    /// The batch definition this config runs against.
    pub batch_definition_id: Uuid,
}

impl ValidationConfig {
    pub fn new(
        name: impl Into<String>,
        expectation_suite_id: Uuid,
        batch_definition_id: Uuid,
    ) -> Self {
        Self {
            name: name.into(),
            id: None,
            expectation_suite_id,
            batch_definition_id,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let config = ValidationConfig::new("checkout_daily", Uuid::new_v4(), Uuid::new_v4())
            .with_id(Uuid::new_v4());
        let json = serde_json::to_string(&config).unwrap();
        let back: ValidationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn id_is_omitted_when_absent() {
        let config = ValidationConfig::new("checkout_daily", Uuid::new_v4(), Uuid::new_v4());
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("id").is_none());
    }
}
