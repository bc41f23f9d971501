//! JSON-file store. One file per storage key, pretty-printed so a saved
//! session stays inspectable by hand.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use astra_core::models::metrics::MetricsEntry;
use astra_core::models::session::Session;
use astra_core::storage_keys;

use crate::error::StoreError;
use crate::{MetricsStore, SessionStore};

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at the platform data directory, scoped to this
    /// application — the desktop analog of the browser's local storage.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?.join("astra");
        Self::open(dir)
    }

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Read an entry. Missing files and unreadable JSON both read as
    /// absence; only I/O failures other than not-found propagate.
    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(key);
        let raw = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        match serde_json::from_slice(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!(key, %error, "discarding unreadable store entry");
                Ok(None)
            }
        }
    }

    fn write_entry<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(value)?;
        fs::write(self.dir.join(key), body)?;
        Ok(())
    }

    fn remove_entry(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.dir.join(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        self.read_entry(storage_keys::SESSION)
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        self.write_entry(storage_keys::SESSION, session)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.remove_entry(storage_keys::SESSION)
    }
}

impl MetricsStore for JsonFileStore {
    fn history(&self) -> Result<Vec<MetricsEntry>, StoreError> {
        Ok(self.read_entry(storage_keys::METRICS)?.unwrap_or_default())
    }

    fn append(&self, entry: MetricsEntry) -> Result<(), StoreError> {
        let mut history = self.history()?;
        history.push(entry);
        self.write_entry(storage_keys::METRICS, &history)
    }
}
