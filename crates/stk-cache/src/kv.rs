//! Key-Value store wrapper with automatic serialization.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A raw byte-oriented Key-Value store.
///
/// Writes overwrite the previous value for a key; there is no merging and no
/// conflict detection.
pub trait KvStore {
    /// Get the raw bytes for a key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Set the raw bytes for a key.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CacheError>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a UTF-8 value.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into().into_bytes());
        store
    }

    /// Get a value as a UTF-8 string, if present and valid.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Directory-backed store. Each key is one `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(format!("{}.json", file))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Type-safe cache over any [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::SerializeError`] if it exists but does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing any previous value.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: u32,
        quantity: u32,
    }

    #[test]
    fn test_memory_roundtrip() {
        let mut cache = Cache::new(MemoryStore::new());
        cache.set("cart", &vec![Line { id: 1, quantity: 3 }]).unwrap();

        let lines: Vec<Line> = cache.get("cart").unwrap().unwrap();
        assert_eq!(lines, vec![Line { id: 1, quantity: 3 }]);
        assert!(cache.store().get_str("cart").is_some());
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Vec<Line>> = cache.get("cart").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_malformed_value() {
        let cache = Cache::new(MemoryStore::with_entry("cart", "{not json"));
        let err = cache.get::<Vec<Line>>("cart").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_set_overwrites() {
        let mut cache = Cache::new(MemoryStore::new());
        cache.set("cart", &vec![Line { id: 1, quantity: 1 }]).unwrap();
        cache.set("cart", &Vec::<Line>::new()).unwrap();

        assert_eq!(cache.store().get_str("cart"), Some("[]"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = Cache::new(FileStore::open(dir.path()).unwrap());
        cache.set("cart", &vec![Line { id: 7, quantity: 2 }]).unwrap();

        // Reopen to make sure the value actually hit the disk.
        let reopened = Cache::new(FileStore::open(dir.path()).unwrap());
        let lines: Vec<Line> = reopened.get("cart").unwrap().unwrap();
        assert_eq!(lines[0].id, 7);
        assert!(!dir.path().join("cart.json.tmp").exists());
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_file_store_open_fails_on_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = FileStore::open(file.path()).unwrap_err();
        assert!(matches!(err, CacheError::OpenError(_)));
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("cart:guest/1", b"[]").unwrap();

        assert!(dir.path().join("cart_guest_1.json").exists());
        assert_eq!(store.get("cart:guest/1").unwrap(), Some(b"[]".to_vec()));
    }
}
