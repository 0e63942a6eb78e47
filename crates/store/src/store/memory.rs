use std::collections::HashMap;
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};

use super::{RecordStore, StoreError, StoreKey};

/// In-memory record store; the reference backend for tests and ephemeral
/// contexts.
#[derive(Debug, Default)]
pub struct InMemoryStore<R> {
    records: Mutex<HashMap<String, R>>,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> InMemoryStore<R>
where
    R: Clone,
{
    /// All records currently held, in unspecified order.
    pub fn list(&self) -> Result<Vec<R>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }
}

impl<R> RecordStore for InMemoryStore<R>
where
    R: Serialize + DeserializeOwned + Clone,
{
    type Record = R;

    fn has_key(&self, key: &StoreKey) -> Result<bool, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.contains_key(&key.name))
    }

    fn add(&self, key: &StoreKey, record: &Self::Record) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.insert(key.name.clone(), record.clone());
        Ok(())
    }

    fn remove_key(&self, key: &StoreKey) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records
            .remove(&key.name)
            .map(|_| ())
            .ok_or_else(|| StoreError::MissingKey {
                name: key.name.clone(),
            })
    }

    fn get(&self, key: &StoreKey) -> Result<Self::Record, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records
            .get(&key.name)
            .cloned()
            .ok_or_else(|| StoreError::MissingKey {
                name: key.name.clone(),
            })
    }
}
