//! In-memory store. Test double with the same contract as the file store.

use std::sync::Mutex;

use astra_core::models::metrics::MetricsEntry;
use astra_core::models::session::Session;

use crate::error::StoreError;
use crate::{MetricsStore, SessionStore};

#[derive(Default)]
pub struct MemoryStore {
    session: Mutex<Option<Session>>,
    history: Mutex<Vec<MetricsEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let store = Self::default();
        *store.session.lock().unwrap_or_else(|e| e.into_inner()) = Some(session);
        store
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

impl MetricsStore for MemoryStore {
    fn history(&self) -> Result<Vec<MetricsEntry>, StoreError> {
        Ok(self
            .history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn append(&self, entry: MetricsEntry) -> Result<(), StoreError> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry);
        Ok(())
    }
}
