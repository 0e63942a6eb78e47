use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{slugify, RecordStore, StoreError, StoreKey};

/// Filesystem-backed record store.
///
/// Each record is persisted as `{base_dir}/{slug(name)}.json`. The directory
/// is the sole source of truth; nothing is cached in memory.
#[derive(Debug)]
pub struct FileStore<R> {
    base_dir: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> FileStore<R> {
    /// Create a new store, ensuring the base directory exists.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            _record: PhantomData,
        })
    }

    /// Base path for this store.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, key: &StoreKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", slugify(&key.name)))
    }
}

impl<R> FileStore<R>
where
    R: DeserializeOwned,
{
    /// Load every record on disk, in filename order.
    pub fn list(&self) -> Result<Vec<R>, StoreError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.base_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let json = std::fs::read_to_string(&path)?;
            records.push(serde_json::from_str(&json)?);
        }
        Ok(records)
    }
}

impl<R> RecordStore for FileStore<R>
where
    R: Serialize + DeserializeOwned + Clone,
{
    type Record = R;

    fn has_key(&self, key: &StoreKey) -> Result<bool, StoreError> {
        Ok(self.record_path(key).exists())
    }

    fn add(&self, key: &StoreKey, record: &Self::Record) -> Result<(), StoreError> {
        let path = self.record_path(key);
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "record written");
        Ok(())
    }

    fn remove_key(&self, key: &StoreKey) -> Result<(), StoreError> {
        let path = self.record_path(key);
        if !path.exists() {
            return Err(StoreError::MissingKey {
                name: key.name.clone(),
            });
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    fn get(&self, key: &StoreKey) -> Result<Self::Record, StoreError> {
        let path = self.record_path(key);
        if !path.exists() {
            return Err(StoreError::MissingKey {
                name: key.name.clone(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
