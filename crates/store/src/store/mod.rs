mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::InMemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// Addresses a single record within a store.
///
/// Uniqueness is by `name`; the `id` is carried along for file naming and
/// event payloads but never participates in lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKey {
    pub name: String,
    pub id: Option<Uuid>,
}

impl StoreKey {
    pub fn new(name: impl Into<String>, id: Option<Uuid>) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// Key-value persistence for named records.
///
/// Backends must provide read-your-writes consistency within a single
/// process; callers layer no locking on top, so each operation is expected
/// to be atomic at the key level.
pub trait RecordStore {
    type Record: Serialize + DeserializeOwned + Clone;

    /// Compute the key addressing `name` (and optionally carrying `id`).
    fn get_key(&self, name: &str, id: Option<Uuid>) -> StoreKey {
        StoreKey::new(name, id)
    }

    /// Whether a record exists for `key`.
    fn has_key(&self, key: &StoreKey) -> Result<bool, StoreError>;

    /// Persist `record` under `key`.
    fn add(&self, key: &StoreKey, record: &Self::Record) -> Result<(), StoreError>;

    /// Remove the record under `key`. Fails with [`StoreError::MissingKey`]
    /// if absent.
    fn remove_key(&self, key: &StoreKey) -> Result<(), StoreError>;

    /// Fetch the record under `key`. Fails with [`StoreError::MissingKey`]
    /// if absent.
    fn get(&self, key: &StoreKey) -> Result<Self::Record, StoreError>;
}

/// Convert a record name to a safe filename slug.
pub(crate) fn slugify(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    // Collapse consecutive dashes and trim.
    let mut result = String::new();
    let mut last_was_dash = false;
    for c in slug.chars() {
        if c == '-' {
            if !last_was_dash && !result.is_empty() {
                result.push('-');
            }
            last_was_dash = true;
        } else {
            result.push(c);
            last_was_dash = false;
        }
    }
    result.trim_end_matches('-').to_string()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
