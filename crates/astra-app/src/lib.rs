//! astra-app
//!
//! Ties the pieces together: one [`Assessment`] owns the session, walks it
//! through the flow, persists after every mutation, and turns completion
//! into an insight plus a metrics record.

pub mod assessment;
pub mod error;

pub use assessment::Assessment;
pub use error::AppError;
