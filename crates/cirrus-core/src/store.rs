//! Durable key-value preferences.
//!
//! Writes are fire-and-forget (failures are logged, never surfaced) and
//! reads are best-effort. The weather sync layer keeps the last-known
//! snapshot here; the favorites layer keeps the recent-search list.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::Mutex;

/// Key under which the last successfully fetched weather snapshot lives.
pub const LAST_KNOWN_WEATHER_KEY: &str = "last_known_weather";

/// Key under which the recent-search list lives.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Opaque durable key-value store.
pub trait PreferenceStore: Send + Sync {
    /// Persist `bytes` under `key`, replacing any previous value.
    fn save(&self, key: &str, bytes: &[u8]);

    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<Vec<u8>>;
}

/// File-backed store: one file per key under a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PreferenceStore for FileStore {
    fn save(&self, key: &str, bytes: &[u8]) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!("Failed to create preference dir {:?}: {}", self.dir, e);
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), bytes) {
            tracing::warn!("Failed to persist preference {}: {}", key, e);
        }
    }

    fn load(&self, key: &str) -> Option<Vec<u8>> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::debug!("Failed to read preference {}: {}", key, e);
                None
            }
        }
    }
}

/// In-memory store for tests and fakes.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn save(&self, key: &str, bytes: &[u8]) {
        self.entries.lock().insert(key.to_string(), bytes.to_vec());
    }

    fn load(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().get(key).cloned()
    }
}
