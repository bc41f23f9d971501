//! astra-core
//!
//! Pure domain types and storage key conventions. No I/O and no collaborator
//! dependencies — this is the shared vocabulary of the Astra pain-assessment
//! system.

pub mod models;
pub mod storage_keys;
