//! Insight memoization keyed by a stable fingerprint of the answer set.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use astra_core::models::insight::InsightResult;
use astra_core::models::language::Language;
use astra_core::models::session::Responses;

/// Stable fingerprint for a (responses, language) pair.
///
/// The response map is ordered, so equal answer sets serialize identically
/// regardless of the order they were answered in.
pub fn fingerprint(responses: &Responses, language: Language) -> String {
    let canonical = serde_json::to_string(responses).unwrap_or_default();
    format!("{}:{}", language.code(), STANDARD.encode(canonical))
}

#[derive(Default)]
pub struct InsightCache {
    entries: HashMap<String, InsightResult>,
}

impl InsightCache {
    pub fn get(&self, key: &str) -> Option<&InsightResult> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, result: InsightResult) {
        self.entries.insert(key, result);
    }
}
