use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a question in the canonical flow. Closed set — the flow is
/// fixed configuration, so invalid ids are unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum QuestionId {
    Region,
    Intensity,
    Duration,
    PainQuality,
    Symptoms,
    Lifestyle,
    Sleep,
    Mobility,
}

impl QuestionId {
    /// The wire/storage key for this question.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionId::Region => "region",
            QuestionId::Intensity => "intensity",
            QuestionId::Duration => "duration",
            QuestionId::PainQuality => "painQuality",
            QuestionId::Symptoms => "symptoms",
            QuestionId::Lifestyle => "lifestyle",
            QuestionId::Sleep => "sleep",
            QuestionId::Mobility => "mobility",
        }
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The label table a choice question draws its options from. The labels
/// themselves live in the localization tables; questions reference them
/// only by group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum OptionGroup {
    Regions,
    Duration,
    PainQuality,
    Symptoms,
    Lifestyle,
    Sleep,
    Mobility,
}
