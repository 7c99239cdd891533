//! Durable key/value storage for the language preference
//!
//! The store persists a single raw language code under one key. Backends are
//! synchronous: an in-process map, a JSON file standing in for per-origin
//! storage, and Redis.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use redis::Commands;
use tracing::{debug, warn};
use crate::config::{StorageBackend, StorageConfig};
use crate::utils::errors::{I18nError, Result};

/// Key/value storage used by the language store
pub trait LanguageStorage: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| I18nError::StoragePersistence("memory storage lock poisoned".to_string()))
    }
}

impl LanguageStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object file holding every key of one origin
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            I18nError::StoragePersistence(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }
}

impl LanguageStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.load()?;
        debug!(path = %self.path.display(), key = key, found = entries.contains_key(key), "File storage read");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| I18nError::StoragePersistence("file storage lock poisoned".to_string()))?;

        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable storage file");
                HashMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        let serialized = serde_json::to_string_pretty(&entries)?;
        let persist = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let tmp_path = self.path.with_extension("tmp");
            fs::write(&tmp_path, serialized)?;
            fs::rename(&tmp_path, &self.path)
        };

        persist().map_err(|e| {
            I18nError::StoragePersistence(format!("failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), key = key, "File storage write");
        Ok(())
    }
}

/// Redis-backed storage, keys namespaced by `prefix`
pub struct RedisStorage {
    connection: Mutex<redis::Connection>,
    prefix: String,
}

impl RedisStorage {
    /// Connect to Redis
    pub fn connect(url: &str, prefix: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection()?;

        Ok(Self {
            connection: Mutex::new(connection),
            prefix: prefix.into(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn with_connection<T>(&self, op: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>) -> Result<T> {
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| I18nError::StoragePersistence("redis connection lock poisoned".to_string()))?;
        Ok(op(&mut *conn)?)
    }
}

impl fmt::Debug for RedisStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStorage").field("prefix", &self.prefix).finish()
    }
}

impl LanguageStorage for RedisStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let full_key = self.full_key(key);
        let value: Option<String> = self.with_connection(|conn| conn.get(&full_key))?;
        debug!(key = %full_key, found = value.is_some(), "Redis storage read");
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let full_key = self.full_key(key);
        self.with_connection(|conn| conn.set::<_, _, ()>(&full_key, value))?;
        debug!(key = %full_key, "Redis storage write");
        Ok(())
    }
}

/// Build the configured storage backend
pub fn storage_from_config(config: &StorageConfig) -> Result<Arc<dyn LanguageStorage>> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageBackend::File => {
            let path = config
                .path
                .as_deref()
                .ok_or_else(|| I18nError::Config("Storage path is required for the file backend".to_string()))?;
            Ok(Arc::new(FileStorage::new(path)))
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| I18nError::Config("Redis URL is required for the redis backend".to_string()))?;
            Ok(Arc::new(RedisStorage::connect(url, config.prefix.clone())?))
        }
    }
}
