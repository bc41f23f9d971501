//! astra-flow
//!
//! Question-flow definitions and the step engine. Pure state machinery —
//! no I/O, no persistence, no label text. The flow is fixed configuration;
//! the engine walks it against a session.

pub mod engine;
pub mod error;
pub mod questions;
