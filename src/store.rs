//! Durable key-value storage for the arrangement blob
//!
//! Stores hold a single opaque string under a fixed key. They know nothing
//! about arrangements; parsing and validation belong to `reconcile`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "businessPortalState";

pub trait PersistenceStore {
    /// Replace the stored blob
    fn save(&mut self, blob: &str) -> io::Result<()>;

    /// The previously saved blob, or `None` on first run
    fn load(&self) -> Option<String>;
}

/// In-process store, used by tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    key: String,
    entries: HashMap<String, String>,
    /// Number of successful saves, for observing commits
    pub saves: usize,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Store pre-seeded with a blob, as if saved by an earlier session
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut store = Self::new(key);
        store.entries.insert(store.key.clone(), blob.into());
        store
    }
}

impl PersistenceStore for MemoryStore {
    fn save(&mut self, blob: &str) -> io::Result<()> {
        self.entries.insert(self.key.clone(), blob.to_string());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Option<String> {
        self.entries.get(&self.key).cloned()
    }
}

/// File-backed store: one `<key>.json` file per key under a state directory
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    /// Store under the default state directory, if one can be resolved
    pub fn in_state_dir(key: &str) -> Option<Self> {
        crate::config_paths::state_dir().map(|dir| Self::new(dir, key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceStore for FileStore {
    fn save(&mut self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename so readers never observe a half-written blob
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, blob)?;
        std::fs::rename(&tmp, &self.path)
    }

    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(
                    "Failed to read stored arrangement at {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}
