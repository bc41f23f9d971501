use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A stored response to one question.
///
/// The shape is tagged by question kind so invalid combinations are
/// unrepresentable. `Skipped` is an explicit pass — the user saw the
/// question and declined it — which is distinguishable from a question
/// that was never asked (absent from the response map).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    /// Selected option key of a single-choice question.
    Single(String),
    /// Selected option keys of a multi-choice question, in selection order.
    Multi(Vec<String>),
    /// Value of a numeric slider question.
    Scale(f64),
    /// Explicit skip of an optional question.
    Skipped,
}

impl Answer {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Answer::Single(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Answer::Multi(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_scale(&self) -> Option<f64> {
        match self {
            Answer::Scale(value) => Some(*value),
            _ => None,
        }
    }
}
