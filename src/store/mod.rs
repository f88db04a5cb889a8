pub mod keys;
pub mod memory;
pub mod trees;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use thiserror::Error;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key/value backend the progress store writes through to.
///
/// Values are opaque serialized blobs. Absent keys load as `None`.
pub trait Persistence {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// sled-backed persistence: one tree, one JSON blob per key.
#[derive(Debug)]
pub struct Store {
    db: Db,
    progress: sled::Tree,
}

impl Store {
    pub fn open(sled_path: &str) -> Result<Self, StoreError> {
        let db = sled::open(sled_path)?;
        let progress = db.open_tree(trees::PROGRESS)?;
        Ok(Self { db, progress })
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    pub fn raw_db(&self) -> &Db {
        &self.db
    }
}

impl Persistence for Store {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.progress.get(key.as_bytes())?.map(|raw| raw.to_vec()))
    }

    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.progress.insert(key.as_bytes(), value)?;
        Ok(())
    }
}

pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec(value)?)
}

pub(crate) fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// 读取并解析存储值；缺失返回 `None`，损坏的数据记录警告后同样视为缺失。
pub fn load_value<T, P>(backend: &P, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    P: Persistence + ?Sized,
{
    let Some(raw) = backend.load(key)? else {
        return Ok(None);
    };
    match deserialize::<T>(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to parse stored value, using fallback");
            Ok(None)
        }
    }
}

pub fn load_or<T, P>(backend: &P, key: &str, fallback: T) -> Result<T, StoreError>
where
    T: DeserializeOwned,
    P: Persistence + ?Sized,
{
    Ok(load_value(backend, key)?.unwrap_or(fallback))
}

pub fn save_value<T, P>(backend: &mut P, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    P: Persistence + ?Sized,
{
    let bytes = serialize(value)?;
    backend.save(key, &bytes)
}
