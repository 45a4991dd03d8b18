//! Opaque key-value persistence backends

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use fr_core::{FrError, FrResult};

/// Opaque key-value storage interface
///
/// The catalog store persists through this trait so tests run against an
/// in-memory backend while production uses a JSON file.
pub trait KvStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> FrResult<Option<String>>;

    /// Store `value` under `key`
    fn set(&self, key: &str, value: &str) -> FrResult<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> FrResult<()>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> FrResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FrResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> FrResult<()> {
        (**self).remove(key)
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> FrResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FrResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FrResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object per file, write-through cache
#[derive(Debug)]
pub struct JsonFileKv {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl JsonFileKv {
    /// Open a store at `path`, starting empty if the file is missing or unreadable
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    fn flush(&self) -> FrResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&*self.cache.read())
            .map_err(|e| FrError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvStore for JsonFileKv {
    fn get(&self, key: &str) -> FrResult<Option<String>> {
        Ok(self.cache.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FrResult<()> {
        self.cache
            .write()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&self, key: &str) -> FrResult<()> {
        self.cache.write().remove(key);
        self.flush()
    }
}
