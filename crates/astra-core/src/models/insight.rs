use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The structured insight for a completed session.
///
/// This is the exact JSON shape the AI provider is instructed to return;
/// the deterministic fallback produces the same shape, so callers never
/// see which path ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InsightResult {
    pub summary: String,
    pub probable_diagnosis: String,
    pub plan: Vec<String>,
    pub timeline: String,
    pub risk_score: f64,
    pub risk_band: RiskBand,
    pub deep_dive: String,
    pub disclaimer: String,
    pub metrics: InsightMetrics,
}

/// Numeric summaries derived from the answers. Not clinical measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InsightMetrics {
    /// 0–100.
    pub pain_index: u32,
    /// 35–94 on the fallback path; provider-supplied otherwise.
    pub confidence: u32,
    /// Six projected recovery percentages, non-decreasing.
    pub recovery_curve: [u32; 6],
    pub risk_band: RiskBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Band for a risk score, thresholds fixed at 0.33 and 0.66.
    pub fn from_score(score: f64) -> Self {
        if score > 0.66 {
            RiskBand::High
        } else if score > 0.33 {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }
}
