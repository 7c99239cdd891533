//! Storage doubles

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use PharmaLingo::i18n::{LanguageChanged, LanguageCode, LanguageStore};
use PharmaLingo::state::{LanguageStorage, MemoryStorage};
use PharmaLingo::{I18nError, Result};

/// Storage whose writes always fail, counting attempts
#[derive(Debug, Default)]
pub struct FailingStorage {
    pub write_attempts: AtomicUsize,
}

impl LanguageStorage for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        Err(I18nError::StoragePersistence("quota exceeded".to_string()))
    }
}

/// Memory storage that counts writes
#[derive(Debug, Clone, Default)]
pub struct CountingStorage {
    pub inner: MemoryStorage,
    pub writes: Arc<AtomicUsize>,
}

impl LanguageStorage for CountingStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, value)
    }
}

/// Store over shared memory storage, falling back to English
pub fn memory_store(storage: &MemoryStorage) -> LanguageStore {
    LanguageStore::new(Arc::new(storage.clone()), LanguageCode::En)
}

/// Events collected by a listener
pub type EventLog = Arc<Mutex<Vec<LanguageChanged>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Listener that appends every event to `log`
pub fn recording_listener(log: &EventLog) -> impl Fn(&LanguageChanged) + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |event: &LanguageChanged| log.lock().unwrap().push(*event)
}
