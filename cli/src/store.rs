//! File-backed session store for the CLI.
//!
//! The whole session is one small JSON object (`{"token": ..., "user": ...}`)
//! rewritten on every change, so separate CLI invocations share a login.

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use session::{SessionStore, StoreError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Load the store at `path`. A missing file is an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the file exists but cannot be
    /// read or is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::Unavailable(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Unavailable(format!("{}: {e}", path.display()))),
        };
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update<F>(&self, key: &str, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        change(&mut entries);
        let rendered = serde_json::to_string_pretty(&*entries)
            .map_err(|e| StoreError::Write { key: key.to_owned(), message: e.to_string() })?;
        std::fs::write(&self.path, rendered)
            .map_err(|e| StoreError::Write { key: key.to_owned(), message: e.to_string() })
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(key, |entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.get(key).is_none() {
            return Ok(());
        }
        self.update(key, |entries| {
            entries.remove(key);
        })
    }
}
