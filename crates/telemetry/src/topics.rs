//! Topic constants for event routing.
//!
//! Topics follow the pattern `datacheck.<domain>.<event>` for consistent
//! namespace-qualified routing across all components.

/// Fired when a validation config is added to a store.
pub const VALIDATION_CONFIG_CREATED: &str = "datacheck.validation_config.created";

/// Fired when a validation config is removed from a store.
pub const VALIDATION_CONFIG_DELETED: &str = "datacheck.validation_config.deleted";
