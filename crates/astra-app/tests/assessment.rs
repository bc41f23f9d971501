use async_trait::async_trait;

use astra_app::{AppError, Assessment};
use astra_core::models::answer::Answer;
use astra_core::models::insight::{InsightMetrics, InsightResult, RiskBand};
use astra_core::models::language::Language;
use astra_core::models::metrics::MetricsEntry;
use astra_core::models::question::QuestionId;
use astra_core::models::session::Session;
use astra_flow::engine::Step;
use astra_insight::error::InsightError;
use astra_insight::{InsightProvider, fallback};
use astra_locale::LanguagePack;
use astra_store::error::StoreError;
use astra_store::memory::MemoryStore;
use astra_store::{MetricsStore, SessionStore};

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

struct FakeProvider;

#[async_trait]
impl InsightProvider for FakeProvider {
    async fn generate(
        &self,
        _session: &Session,
        language: Language,
        _pack: &LanguagePack,
    ) -> Result<InsightResult, InsightError> {
        Ok(canned_insight(&format!("provider insight ({language})")))
    }
}

/// A store whose reads always fail. Writes succeed so the flow can proceed.
struct UnreadableStore;

impl SessionStore for UnreadableStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Err(StoreError::NoDataDir)
    }

    fn save(&self, _session: &Session) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

impl MetricsStore for UnreadableStore {
    fn history(&self) -> Result<Vec<MetricsEntry>, StoreError> {
        Err(StoreError::NoDataDir)
    }

    fn append(&self, _entry: MetricsEntry) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Walk every question of a knee/intensity-8 session to completion.
fn walk_to_completion(assessment: &mut Assessment<MemoryStore, FakeProvider>) {
    assessment
        .submit(Answer::Multi(vec!["knee".into()]))
        .unwrap();
    assessment.submit(Answer::Scale(8.0)).unwrap();
    assessment.submit(Answer::Single("chronic".into())).unwrap();
    assessment.submit(Answer::Single("burning".into())).unwrap();
    assessment.skip().unwrap();
    assessment.skip().unwrap();
    assessment.submit(Answer::Single("poor".into())).unwrap();
    assessment.submit(Answer::Single("moderate".into())).unwrap();
}

#[test]
fn empty_store_starts_a_fresh_session() {
    let assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);

    assert!(!assessment.resumed());
    assert_eq!(assessment.session().step_index, 0);
    assert!(matches!(
        assessment.current_step(),
        Step::Question { index: 0, .. }
    ));
}

#[test]
fn stored_snapshot_is_resumed_in_place() {
    let mut stored = Session::new(Language::Hi);
    stored
        .responses
        .insert(QuestionId::Region, Answer::Multi(vec!["lower_back".into()]));
    stored.order.push(QuestionId::Region);
    stored.step_index = 1;

    let assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::with_session(stored), None, Language::En);

    assert!(assessment.resumed());
    assert_eq!(assessment.session().step_index, 1);
    // The stored language wins over the launch language.
    assert_eq!(assessment.session().language, Language::Hi);
}

#[test]
fn unreadable_store_starts_fresh_instead_of_failing() {
    let assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(UnreadableStore, None, Language::En);

    assert!(!assessment.resumed());
    assert_eq!(assessment.session().step_index, 0);
}

#[test]
fn every_mutation_is_persisted_synchronously() {
    let mut assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);

    assessment
        .submit(Answer::Multi(vec!["knee".into()]))
        .unwrap();
    let snapshot = assessment.store().load().unwrap().unwrap();
    assert_eq!(snapshot.step_index, 1);
    assert!(snapshot.responses.contains_key(&QuestionId::Region));

    assessment.go_back().unwrap();
    let snapshot = assessment.store().load().unwrap().unwrap();
    assert_eq!(snapshot.step_index, 0);
}

#[tokio::test]
async fn finalize_rejects_an_unfinished_walk() {
    let mut assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);

    assessment
        .submit(Answer::Multi(vec!["knee".into()]))
        .unwrap();
    assert!(matches!(
        assessment.finalize().await,
        Err(AppError::NotComplete)
    ));
}

#[tokio::test]
async fn full_walk_finalizes_with_the_fallback() {
    let mut assessment: Assessment<MemoryStore, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);

    walk_to_completion(&mut assessment);
    assert!(matches!(assessment.current_step(), Step::Complete));

    let insight = assessment.finalize().await.unwrap();
    let expected = fallback::generate(
        &assessment.session().responses,
        astra_locale::pack(Language::En),
    );
    assert_eq!(insight, expected);

    // The snapshot is cleared and the outcome is in the history.
    assert!(assessment.store().load().unwrap().is_none());
    let history = assessment.store().history().unwrap();
    assert_eq!(history.len(), 1);
    match &history[0] {
        MetricsEntry::Session(record) => {
            assert_eq!(record.regions, vec!["knee".to_string()]);
            assert_eq!(record.intensity, Some(8.0));
            assert!(record.duration_ms >= 0);
            assert_eq!(record.metrics, insight.metrics);
        }
        other => panic!("expected a session record, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_finalize_logs_exactly_one_session_record() {
    let mut assessment: Assessment<MemoryStore, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);

    walk_to_completion(&mut assessment);
    let first = assessment.finalize().await.unwrap();
    let second = assessment.finalize().await.unwrap();
    assert_eq!(first, second);

    let history = assessment.store().history().unwrap();
    assert_eq!(
        history.len(),
        1,
        "one completed walk must log exactly one session record"
    );
    // The re-entry must not shadow the record infer_intensity reads.
    assert_eq!(assessment.infer_intensity(), 10.0);
}

#[tokio::test]
async fn provider_insight_is_preferred_when_available() {
    let mut assessment =
        Assessment::resume_or_new(MemoryStore::new(), Some(FakeProvider), Language::En);

    walk_to_completion(&mut assessment);
    let insight = assessment.finalize().await.unwrap();
    assert_eq!(insight.summary, "provider insight (en)");
}

#[tokio::test]
async fn language_toggle_after_completion_regenerates_and_caches() {
    let mut assessment =
        Assessment::resume_or_new(MemoryStore::new(), Some(FakeProvider), Language::En);

    walk_to_completion(&mut assessment);
    let first = assessment.finalize().await.unwrap();
    assert_eq!(first.summary, "provider insight (en)");

    let hindi = assessment.set_language(Language::Hi).await.unwrap();
    assert_eq!(hindi.summary, "provider insight (hi)");

    // Toggling back serves the cached English result.
    let again = assessment.set_language(Language::En).await.unwrap();
    assert_eq!(again, first);
}

#[tokio::test]
async fn language_change_mid_walk_persists_without_insight() {
    let mut assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);

    assessment
        .submit(Answer::Multi(vec!["lower_back".into()]))
        .unwrap();
    assert!(assessment.set_language(Language::Mr).await.is_none());

    let snapshot = assessment.store().load().unwrap().unwrap();
    assert_eq!(snapshot.language, Language::Mr);
    assert!(snapshot.responses.contains_key(&QuestionId::Region));
}

#[test]
fn feedback_lands_in_the_history() {
    let assessment: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::Hi);

    assessment.record_feedback(true);
    let history = assessment.store().history().unwrap();
    match &history[0] {
        MetricsEntry::Feedback(record) => {
            assert!(record.helpful);
            assert_eq!(record.language, Language::Hi);
        }
        other => panic!("expected a feedback record, got {other:?}"),
    }
}

#[tokio::test]
async fn intensity_inference_follows_the_latest_session_record() {
    // No history at all.
    let fresh: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);
    assert_eq!(fresh.infer_intensity(), 6.0);

    // Unreadable history.
    let unreadable: Assessment<_, FakeProvider> =
        Assessment::resume_or_new(UnreadableStore, None, Language::En);
    assert_eq!(unreadable.infer_intensity(), 5.0);

    // Latest record is a completed session: painIndex 96 rounds to 10.
    let mut assessment: Assessment<MemoryStore, FakeProvider> =
        Assessment::resume_or_new(MemoryStore::new(), None, Language::En);
    walk_to_completion(&mut assessment);
    assessment.finalize().await.unwrap();
    assert_eq!(assessment.infer_intensity(), 10.0);

    // A trailing feedback entry hides the session record.
    assessment.record_feedback(false);
    assert_eq!(assessment.infer_intensity(), 6.0);
}
