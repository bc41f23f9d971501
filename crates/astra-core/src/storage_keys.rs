//! Storage key conventions.
//!
//! Pure constants — these define the canonical names under which the
//! persistence collaborator stores its entries, mirroring the keys the
//! browser frontend uses for local storage.

/// The in-progress session snapshot.
pub const SESSION: &str = "painAssessment.session.state";

/// The append-only metrics and feedback history.
pub const METRICS: &str = "painAssessment.session.metrics";
