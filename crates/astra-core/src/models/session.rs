use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;
use super::language::Language;
use super::question::QuestionId;

/// The answer map of a session. Ordered so equal answer sets always
/// serialize identically (the insight cache fingerprints this).
pub type Responses = BTreeMap<QuestionId, Answer>;

/// One user's in-progress or completed questionnaire state.
///
/// Owned by exactly one assessment at a time and persisted after every
/// mutation so the in-memory state and the snapshot never diverge.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub responses: Responses,
    /// Question ids in the order they were first answered. Audit/display
    /// only — never consulted by the flow engine.
    pub order: Vec<QuestionId>,
    /// Zero-based pointer into the currently active question list.
    /// Invariant: `0 <= step_index <= active question count`, re-interpreted
    /// against a freshly derived active list on every read.
    pub step_index: usize,
    pub started_at: jiff::Timestamp,
    /// Flips to true exactly once, when the pointer reaches the end of the
    /// active list. Only a brand-new session goes back to in-progress.
    pub completed: bool,
    pub language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            responses: Responses::new(),
            order: Vec::new(),
            step_index: 0,
            started_at: jiff::Timestamp::now(),
            completed: false,
            language,
        }
    }
}
