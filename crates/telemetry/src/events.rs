//! Analytics event payloads.
//!
//! Each type represents a specific domain event. Ids of linked entities are
//! carried as opaque references; the event does not own them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted when a validation config is added to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfigCreated {
    /// Identity of the created validation config (if assigned).
    pub validation_config_id: Option<Uuid>,
    /// Expectation suite the config references.
    pub expectation_suite_id: Uuid,
    /// Batch definition the config references.
    pub batch_definition_id: Uuid,
}

/// Emitted when a validation config is removed from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfigDeleted {
    /// Identity of the deleted validation config (if assigned).
    pub validation_config_id: Option<Uuid>,
    /// Expectation suite the config referenced.
    pub expectation_suite_id: Uuid,
    /// Batch definition the config referenced.
    pub batch_definition_id: Uuid,
}
