//! CRUD factory for named validation configs.
//!
//! The factory owns no state of its own: existence checks and persistence
//! are delegated to a [`RecordStore`], and every successful mutation emits a
//! best-effort analytics event.

use std::sync::Arc;

use tracing::warn;

use datacheck_telemetry::{
    AnalyticsEvent, EventSink, ValidationConfigCreated, ValidationConfigDeleted,
};

use crate::store::{RecordStore, StoreError};
use crate::validation_config::ValidationConfig;

/// Errors raised by [`ValidationFactory`] operations.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("cannot add validation config with name '{name}' because it already exists")]
    AlreadyExists { name: String },

    #[error("validation config with name '{name}' was not found")]
    NotFound { name: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Add/get/delete operations over named [`ValidationConfig`] records.
///
/// The store is the sole source of truth; the factory holds no cache.
pub struct ValidationFactory<S> {
    store: S,
    events: Arc<dyn EventSink>,
}

impl<S> ValidationFactory<S>
where
    S: RecordStore<Record = ValidationConfig>,
{
    pub fn new(store: S, events: Arc<dyn EventSink>) -> Self {
        Self { store, events }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a validation config.
    ///
    /// Fails with [`FactoryError::AlreadyExists`] if a config with the same
    /// name is already stored; in that case the store is left untouched and
    /// no event is emitted.
    pub fn add(&self, config: ValidationConfig) -> Result<ValidationConfig, FactoryError> {
        let key = self.store.get_key(&config.name, None);
        if self.store.has_key(&key)? {
            return Err(FactoryError::AlreadyExists {
                name: config.name.clone(),
            });
        }
        self.store.add(&key, &config)?;

        self.emit(AnalyticsEvent::new(ValidationConfigCreated {
            validation_config_id: config.id,
            expectation_suite_id: config.expectation_suite_id,
            batch_definition_id: config.batch_definition_id,
        }));

        Ok(config)
    }

    /// Delete a validation config.
    ///
    /// Fails with [`FactoryError::NotFound`] if no config with the given
    /// name is stored.
    pub fn delete(&self, config: ValidationConfig) -> Result<ValidationConfig, FactoryError> {
        let key = self.store.get_key(&config.name, config.id);
        if !self.store.has_key(&key)? {
            return Err(FactoryError::NotFound {
                name: config.name.clone(),
            });
        }
        self.store.remove_key(&key)?;

        self.emit(AnalyticsEvent::new(ValidationConfigDeleted {
            validation_config_id: config.id,
            expectation_suite_id: config.expectation_suite_id,
            batch_definition_id: config.batch_definition_id,
        }));

        Ok(config)
    }

    /// Get a validation config by name.
    pub fn get(&self, name: &str) -> Result<ValidationConfig, FactoryError> {
        let key = self.store.get_key(name, None);
        if !self.store.has_key(&key)? {
            return Err(FactoryError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(self.store.get(&key)?)
    }

    /// Fire-and-forget event emission: failures are logged, never raised.
    fn emit(&self, event: AnalyticsEvent) {
        if let Err(e) = self.events.submit(event) {
            warn!(error = %e, "failed to submit analytics event");
        }
    }
}
