use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use astra_core::models::answer::Answer;
use astra_core::models::insight::{InsightMetrics, InsightResult, RiskBand};
use astra_core::models::language::Language;
use astra_core::models::question::QuestionId;
use astra_core::models::session::Session;
use astra_insight::error::InsightError;
use astra_insight::{InsightEngine, InsightProvider, fallback};
use astra_locale::LanguagePack;

fn canned_insight(summary: &str) -> InsightResult {
    InsightResult {
        summary: summary.to_string(),
        probable_diagnosis: "d".to_string(),
        plan: vec!["p".to_string()],
        timeline: "t".to_string(),
        risk_score: 0.5,
        risk_band: RiskBand::Moderate,
        deep_dive: "dd".to_string(),
        disclaimer: "x".to_string(),
        metrics: InsightMetrics {
            pain_index: 50,
            confidence: 70,
            recovery_curve: [0, 25, 45, 60, 78, 90],
            risk_band: RiskBand::Moderate,
        },
    }
}

struct CountingProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingProvider {
    fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InsightProvider for CountingProvider {
    async fn generate(
        &self,
        _session: &Session,
        language: Language,
        _pack: &LanguagePack,
    ) -> Result<InsightResult, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(InsightError::EmptyResponse)
        } else {
            Ok(canned_insight(&format!("provider insight ({language})")))
        }
    }
}

fn completed_session() -> Session {
    let mut session = Session::new(Language::En);
    session
        .responses
        .insert(QuestionId::Region, Answer::Multi(vec!["knee".into()]));
    session
        .responses
        .insert(QuestionId::Intensity, Answer::Scale(8.0));
    session.completed = true;
    session
}

#[tokio::test]
async fn provider_result_is_preferred_when_available() {
    let mut engine = InsightEngine::new(Some(CountingProvider::succeeding()));
    let session = completed_session();

    let insight = engine.generate(&session, Language::En).await;
    assert_eq!(insight.summary, "provider insight (en)");
}

#[tokio::test]
async fn provider_failure_degrades_to_the_fallback() {
    let mut engine = InsightEngine::new(Some(CountingProvider::failing()));
    let session = completed_session();

    let insight = engine.generate(&session, Language::En).await;
    let expected = fallback::generate(&session.responses, astra_locale::pack(Language::En));
    assert_eq!(insight, expected);
}

#[tokio::test]
async fn no_provider_means_fallback_without_io() {
    let mut engine: InsightEngine<CountingProvider> = InsightEngine::new(None);
    let session = completed_session();

    let insight = engine.generate(&session, Language::En).await;
    let expected = fallback::generate(&session.responses, astra_locale::pack(Language::En));
    assert_eq!(insight, expected);
}

#[tokio::test]
async fn repeated_generation_hits_the_cache() {
    let provider = CountingProvider::succeeding();
    let mut engine = InsightEngine::new(Some(provider));
    let session = completed_session();

    let first = engine.generate(&session, Language::En).await;
    let second = engine.generate(&session, Language::En).await;
    assert_eq!(first, second);
    assert_eq!(engine_calls(&engine), 1);
}

#[tokio::test]
async fn language_toggle_reuses_cached_results() {
    let provider = CountingProvider::succeeding();
    let mut engine = InsightEngine::new(Some(provider));
    let session = completed_session();

    engine.generate(&session, Language::En).await;
    engine.generate(&session, Language::Hi).await;
    assert_eq!(engine_calls(&engine), 2);

    // Toggling back recomputes nothing.
    let again = engine.generate(&session, Language::En).await;
    assert_eq!(again.summary, "provider insight (en)");
    assert_eq!(engine_calls(&engine), 2);
}

fn engine_calls(engine: &InsightEngine<CountingProvider>) -> usize {
    engine.provider().map(CountingProvider::calls).unwrap_or(0)
}
