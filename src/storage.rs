use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Key-value store backing the offline fallback. Values are stored as JSON.
///
/// Write failures are logged and swallowed: losing a fallback write must not
/// take down the calling operation.
#[cfg_attr(test, mockall::automock)]
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: &Value);
    fn remove(&self, key: &str);
}

pub fn get_typed<T: DeserializeOwned>(store: &dyn LocalStore, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(key, error = %e, "stored value does not match expected shape, treating as absent");
            None
        }
    }
}

pub fn set_typed<T: Serialize>(store: &dyn LocalStore, key: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => warn!(key, error = %e, "failed to serialize value for local store"),
    }
}

/// On-disk store: one `<key>.json` file per key under a data directory.
///
/// I/O is synchronous so a read-modify-write cycle inside one logical call
/// cannot interleave with the rest of that call.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl LocalStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let raw = std::fs::read_to_string(self.path_for(key)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt JSON in local store file, treating as absent");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &Value) {
        let path = self.path_for(key);
        let serialized = match serde_json::to_string_pretty(value) {
            Ok(s) => s,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize local store value");
                return;
            }
        };
        if let Err(e) = std::fs::write(&path, serialized) {
            warn!(key, path = %path.display(), error = %e, "failed to write local store file");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(key, error = %e, "failed to remove local store file");
            }
        }
    }
}

/// In-memory store used when no data directory is configured, and in tests.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<dyn LocalStore> {
        Arc::new(Self::new())
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &Value) {
        match self.map.lock() {
            Ok(mut map) => {
                map.insert(key.to_string(), value.clone());
            }
            Err(e) => warn!(key, error = %e, "memory store lock poisoned, dropping write"),
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.remove(key);
        }
    }
}
