//! Key-value persistence substrate.
//!
//! The store only needs string get/set of JSON blobs, so any backend
//! (browser `localStorage`, a file, an embedded DB) can sit behind
//! [`KeyValueStorage`].

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// String-keyed blob storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Outcome of reading a JSON value back.
#[derive(Debug)]
pub enum Loaded<T> {
    Found(T),
    Missing,
    Invalid(String),
}

/// Reads and decodes `key`. Backend errors are reported as [`Loaded::Invalid`].
pub fn load_json<T, S>(storage: &S, key: &str) -> Loaded<T>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    match storage.get_item(key) {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => Loaded::Found(value),
            Err(e) => Loaded::Invalid(e.to_string()),
        },
        Ok(None) => Loaded::Missing,
        Err(e) => Loaded::Invalid(e.to_string()),
    }
}

/// Encodes `value` as JSON and writes it under `key`.
pub fn save_json<T, S>(storage: &mut S, key: &str, value: &T) -> Result<(), PersistError>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)?;
    Ok(())
}

/// In-memory storage. Used in tests and as a fallback when no persistent
/// backend is reachable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Reads from an inner [`MemoryStorage`] but refuses every write.
    #[derive(Debug, Default)]
    pub struct FailingStorage {
        pub inner: MemoryStorage,
        pub attempted_writes: usize,
    }

    impl KeyValueStorage for FailingStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.attempted_writes += 1;
            Err(StorageError::QuotaExceeded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_load_missing_and_invalid() {
        let storage = MemoryStorage::new().with_item("bad", "{not json");
        assert!(matches!(load_json::<bool, _>(&storage, "nope"), Loaded::Missing));
        assert!(matches!(load_json::<bool, _>(&storage, "bad"), Loaded::Invalid(_)));
    }

    #[test]
    fn test_wrong_shape_is_invalid() {
        let storage = MemoryStorage::new().with_item("motifProps", r#"{"x":1,"y":2}"#);
        assert!(matches!(load_json::<Rect, _>(&storage, "motifProps"), Loaded::Invalid(_)));
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let rect = Rect::new(0.1 + 0.2, 1e-7, 33.333_333_333_333_336, 150.0);
        save_json(&mut storage, "motifProps", &rect).unwrap();
        match load_json::<Rect, _>(&storage, "motifProps") {
            Loaded::Found(back) => {
                assert_eq!(back.x.to_bits(), rect.x.to_bits());
                assert_eq!(back.y.to_bits(), rect.y.to_bits());
                assert_eq!(back.width.to_bits(), rect.width.to_bits());
                assert_eq!(back.height.to_bits(), rect.height.to_bits());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_failing_write_reports_error() {
        let mut storage = testing::FailingStorage::default();
        let err = save_json(&mut storage, "isLocked", &true).unwrap_err();
        assert!(matches!(err, PersistError::Storage(StorageError::QuotaExceeded)));
        assert_eq!(storage.attempted_writes, 1);
    }
}
