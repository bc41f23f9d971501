//! astra-insight
//!
//! Insight generation for a completed session: an external provider behind
//! a narrow trait, a deterministic no-network fallback, and a fingerprint
//! cache so a (responses, language) pair is computed at most once.

pub mod cache;
pub mod error;
pub mod fallback;
pub mod openai;
pub mod prompt;

use async_trait::async_trait;
use tracing::{debug, warn};

use astra_core::models::insight::InsightResult;
use astra_core::models::language::Language;
use astra_core::models::session::Session;
use astra_locale::LanguagePack;

use crate::cache::InsightCache;
use crate::error::InsightError;

/// An external model that can interpret a completed session.
///
/// May reject for any reason — callers recover with the deterministic
/// fallback and never surface the failure to the user.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate(
        &self,
        session: &Session,
        language: Language,
        pack: &LanguagePack,
    ) -> Result<InsightResult, InsightError>;
}

/// Provider-with-fallback, memoized per (responses, language) pair.
pub struct InsightEngine<P> {
    provider: Option<P>,
    cache: InsightCache,
}

impl<P: InsightProvider> InsightEngine<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            cache: InsightCache::default(),
        }
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Produce the insight for a session in the given language.
    ///
    /// Total: a cache hit returns immediately; a provider failure degrades
    /// to the synchronous fallback. Identical inputs always yield identical
    /// output — the fallback has no randomness and the cache pins whichever
    /// result was produced first.
    pub async fn generate(&mut self, session: &Session, language: Language) -> InsightResult {
        let pack = astra_locale::pack(language);
        let key = cache::fingerprint(&session.responses, language);
        if let Some(hit) = self.cache.get(&key) {
            debug!(%language, "insight cache hit");
            return hit.clone();
        }

        let result = match &self.provider {
            Some(provider) => match provider.generate(session, language, pack).await {
                Ok(result) => result,
                Err(error) => {
                    warn!(%language, %error, "insight provider failed, using deterministic fallback");
                    fallback::generate(&session.responses, pack)
                }
            },
            None => fallback::generate(&session.responses, pack),
        };

        self.cache.insert(key, result.clone());
        result
    }
}
