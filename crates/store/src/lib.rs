pub mod factory;
pub mod store;
pub mod validation_config;

pub use factory::{FactoryError, ValidationFactory};
pub use store::{FileStore, InMemoryStore, RecordStore, StoreError, StoreKey};
pub use validation_config::ValidationConfig;
