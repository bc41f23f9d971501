//! astra-store
//!
//! Persistence collaborators: the session snapshot and the metrics history.
//! A thin JSON-on-disk store mirroring the browser's local-storage contract,
//! plus an in-memory double for tests.

pub mod error;
pub mod file;
pub mod memory;

use astra_core::models::metrics::MetricsEntry;
use astra_core::models::session::Session;

use crate::error::StoreError;

/// Where the in-progress session snapshot lives.
///
/// Implementations must treat unreadable data as absence on `load` — a
/// corrupt snapshot becomes a fresh start, never a failure the flow sees.
pub trait SessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError>;
    fn save(&self, session: &Session) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Append-only history of session outcomes and feedback.
pub trait MetricsStore {
    fn history(&self) -> Result<Vec<MetricsEntry>, StoreError>;
    fn append(&self, entry: MetricsEntry) -> Result<(), StoreError>;
}
