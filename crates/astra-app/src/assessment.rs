//! The assessment orchestrator.
//!
//! Storage failures never interrupt the flow: an unreadable snapshot starts
//! a fresh session, and write failures are logged and swallowed. Only flow
//! errors (invalid answers, illegal skips) reach the caller.

use tracing::{info, warn};

use astra_core::models::answer::Answer;
use astra_core::models::insight::{InsightMetrics, InsightResult};
use astra_core::models::language::Language;
use astra_core::models::metrics::{FeedbackRecord, MetricsEntry, SessionRecord};
use astra_core::models::question::QuestionId;
use astra_core::models::session::Session;
use astra_flow::engine::{FlowEngine, Step};
use astra_insight::{InsightEngine, InsightProvider};
use astra_store::{MetricsStore, SessionStore};

use crate::error::AppError;

/// One user's assessment from first question to insight.
///
/// Exclusive `&mut self` on every mutation means a later request always
/// observes the effects of the one before it; there is no in-flight state
/// for a newer completion or language change to race against.
pub struct Assessment<S, P> {
    store: S,
    engine: FlowEngine,
    insights: InsightEngine<P>,
    session: Session,
    resumed: bool,
    /// The insight produced by [`Assessment::finalize`], kept so re-entry
    /// returns it instead of logging a second metrics record.
    insight: Option<InsightResult>,
}

impl<S, P> Assessment<S, P>
where
    S: SessionStore + MetricsStore,
    P: InsightProvider,
{
    /// Pick up the stored session if one exists, otherwise start fresh in
    /// the given language. A resumed session keeps the language it was
    /// saved with.
    pub fn resume_or_new(store: S, provider: Option<P>, language: Language) -> Self {
        let (session, resumed) = match store.load() {
            Ok(Some(session)) => {
                info!(session_id = %session.id, step = session.step_index, "resuming stored session");
                (session, true)
            }
            Ok(None) => (Session::new(language), false),
            Err(error) => {
                warn!(%error, "stored session unreadable, starting fresh");
                (Session::new(language), false)
            }
        };

        Self {
            store,
            engine: FlowEngine::new(),
            insights: InsightEngine::new(provider),
            session,
            resumed,
            insight: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether this assessment continued a stored session.
    pub fn resumed(&self) -> bool {
        self.resumed
    }

    pub fn current_step(&self) -> Step<'_> {
        self.engine.current_step(&self.session)
    }

    /// Answer the current question and advance.
    pub fn submit(&mut self, answer: Answer) -> Result<(), AppError> {
        self.engine.submit(&mut self.session, answer)?;
        self.persist();
        Ok(())
    }

    /// Pass on the current (optional) question and advance.
    pub fn skip(&mut self) -> Result<(), AppError> {
        self.engine.skip(&mut self.session)?;
        self.persist();
        Ok(())
    }

    /// Step back one question, keeping the stored answer.
    pub fn go_back(&mut self) -> Result<(), AppError> {
        self.engine.go_back(&mut self.session)?;
        self.persist();
        Ok(())
    }

    /// Turn a finished walk into an insight.
    ///
    /// Generates (cache, then provider, then fallback), appends the outcome
    /// to the metrics history, and clears the stored snapshot so the next
    /// launch starts fresh. Idempotent: one walk logs exactly one metrics
    /// record, and a repeat call returns the insight already produced.
    pub async fn finalize(&mut self) -> Result<InsightResult, AppError> {
        if let Some(insight) = &self.insight {
            return Ok(insight.clone());
        }
        if !matches!(self.current_step(), Step::Complete) {
            return Err(AppError::NotComplete);
        }
        self.session.completed = true;

        let language = self.session.language;
        let insight = self.insights.generate(&self.session, language).await;

        self.log_session_metrics(insight.metrics.clone());
        if let Err(error) = self.store.clear() {
            warn!(%error, "unable to clear stored session");
        }
        self.insight = Some(insight.clone());
        Ok(insight)
    }

    /// Switch languages. Answers are never invalidated. On a completed
    /// session this recomputes (or cache-hits) the insight in the new
    /// language; in progress, the choice is persisted with the session.
    pub async fn set_language(&mut self, language: Language) -> Option<InsightResult> {
        self.session.language = language;
        if self.session.completed {
            let insight = self.insights.generate(&self.session, language).await;
            self.insight = Some(insight.clone());
            Some(insight)
        } else {
            self.persist();
            None
        }
    }

    /// Append a "was this helpful?" answer to the metrics history.
    pub fn record_feedback(&self, helpful: bool) {
        let entry = MetricsEntry::Feedback(FeedbackRecord {
            timestamp: jiff::Timestamp::now(),
            helpful,
            language: self.session.language,
        });
        if let Err(error) = self.store.append(entry) {
            warn!(%error, "unable to record feedback");
        }
    }

    /// Suggested starting value for the intensity slider, taken from the
    /// most recent completed session in the history. 6 when there is no
    /// usable record, 5 when the history cannot be read at all.
    pub fn infer_intensity(&self) -> f64 {
        let history = match self.store.history() {
            Ok(history) => history,
            Err(error) => {
                warn!(%error, "metrics history unreadable");
                return 5.0;
            }
        };
        match history.last() {
            Some(MetricsEntry::Session(record)) => {
                (f64::from(record.metrics.pain_index) / 10.0).round().clamp(1.0, 10.0)
            }
            _ => 6.0,
        }
    }

    fn persist(&self) {
        if let Err(error) = self.store.save(&self.session) {
            warn!(session_id = %self.session.id, %error, "unable to persist session");
        }
    }

    fn log_session_metrics(&self, metrics: InsightMetrics) {
        let now = jiff::Timestamp::now();
        let duration_ms = now.as_millisecond() - self.session.started_at.as_millisecond();
        let regions = self
            .session
            .responses
            .get(&QuestionId::Region)
            .and_then(Answer::as_multi)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        let intensity = self
            .session
            .responses
            .get(&QuestionId::Intensity)
            .and_then(Answer::as_scale);

        let entry = MetricsEntry::Session(SessionRecord {
            timestamp: now,
            duration_ms,
            regions,
            intensity,
            metrics,
        });
        if let Err(error) = self.store.append(entry) {
            warn!(%error, "unable to persist session metrics");
        }
    }
}
