use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::insight::InsightMetrics;
use super::language::Language;

/// One entry in the persisted metrics history.
///
/// The history is append-only and mixes completed-session records with
/// user feedback, in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum MetricsEntry {
    Session(SessionRecord),
    Feedback(FeedbackRecord),
}

/// Outcome of a completed assessment, logged once per finalization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionRecord {
    pub timestamp: jiff::Timestamp,
    pub duration_ms: i64,
    pub regions: Vec<String>,
    pub intensity: Option<f64>,
    pub metrics: InsightMetrics,
}

/// A "was this helpful?" response.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeedbackRecord {
    pub timestamp: jiff::Timestamp,
    pub helpful: bool,
    pub language: Language,
}
