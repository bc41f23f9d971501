//! The step engine: walks the canonical flow against a session.
//!
//! The engine holds no per-session state. The active question list is
//! re-derived from the responses on every call — never cached — because
//! changing an earlier answer (back + resubmit) can add or remove later
//! questions. `step_index` is only ever interpreted against a freshly
//! computed list.

use astra_core::models::answer::Answer;
use astra_core::models::session::{Responses, Session};

use crate::error::{FlowError, ValidationError};
use crate::questions::{self, QuestionDefinition, QuestionKind};

/// Where a session currently stands against the active question list.
#[derive(Debug)]
pub enum Step<'a> {
    Question {
        definition: &'static QuestionDefinition,
        /// Zero-based position in the active list.
        index: usize,
        /// Active list length at the time of the call.
        total: usize,
        /// Previously stored answer, if the question was visited before.
        prior: Option<&'a Answer>,
    },
    Complete,
}

pub struct FlowEngine {
    flow: &'static [QuestionDefinition],
}

impl FlowEngine {
    pub fn new() -> Self {
        Self {
            flow: questions::base_order(),
        }
    }

    /// The questions that currently apply, in base order.
    pub fn active_questions(&self, responses: &Responses) -> Vec<&'static QuestionDefinition> {
        self.flow
            .iter()
            .filter(|q| q.inclusion.applies(responses))
            .collect()
    }

    /// The question to show now, or `Complete` once the pointer has reached
    /// the end of the active list.
    pub fn current_step<'a>(&self, session: &'a Session) -> Step<'a> {
        if session.completed {
            return Step::Complete;
        }
        let active = self.active_questions(&session.responses);
        if session.step_index >= active.len() {
            return Step::Complete;
        }
        let definition = active[session.step_index];
        Step::Question {
            definition,
            index: session.step_index,
            total: active.len(),
            prior: session.responses.get(&definition.id),
        }
    }

    /// Whether the answer satisfies the question's requiredness. Optional
    /// questions are always submittable; shape and constraint checks happen
    /// in [`FlowEngine::submit`].
    pub fn can_submit(&self, definition: &QuestionDefinition, answer: &Answer) -> bool {
        if definition.optional {
            return true;
        }
        match (&definition.kind, answer) {
            (QuestionKind::MultiChoice { .. }, Answer::Multi(values)) => !values.is_empty(),
            (QuestionKind::SingleChoice { .. }, Answer::Single(value)) => !value.is_empty(),
            (QuestionKind::Slider { .. }, Answer::Scale(_)) => true,
            _ => false,
        }
    }

    /// Store an answer for the current question and advance the pointer.
    ///
    /// The stored answer may change which later questions apply, so
    /// completion is judged against the list derived *after* the mutation.
    /// Re-answering a visited question does not duplicate its `order` entry.
    pub fn submit(&self, session: &mut Session, answer: Answer) -> Result<(), FlowError> {
        let definition = self.current_definition(session)?;
        self.validate(definition, &answer)?;
        if !self.can_submit(definition, &answer) {
            return Err(ValidationError::AnswerRequired { id: definition.id }.into());
        }

        session.responses.insert(definition.id, answer);
        if !session.order.contains(&definition.id) {
            session.order.push(definition.id);
        }
        session.step_index += 1;
        self.sync_completion(session);
        Ok(())
    }

    /// Record an explicit pass on the current question and advance.
    /// Only legal for optional questions.
    pub fn skip(&self, session: &mut Session) -> Result<(), FlowError> {
        let definition = self.current_definition(session)?;
        if !definition.optional {
            return Err(FlowError::SkipRequired { id: definition.id });
        }

        session.responses.insert(definition.id, Answer::Skipped);
        session.step_index += 1;
        self.sync_completion(session);
        Ok(())
    }

    /// Step back one question. A no-op at the first question. The stored
    /// answer is kept, so the revisited question renders pre-filled.
    pub fn go_back(&self, session: &mut Session) -> Result<(), FlowError> {
        if session.completed {
            return Err(FlowError::SessionCompleted);
        }
        if session.step_index == 0 {
            return Ok(());
        }
        session.step_index -= 1;
        Ok(())
    }

    fn current_definition(
        &self,
        session: &mut Session,
    ) -> Result<&'static QuestionDefinition, FlowError> {
        if session.completed {
            return Err(FlowError::SessionCompleted);
        }
        let active = self.active_questions(&session.responses);
        match active.get(session.step_index) {
            Some(definition) => Ok(definition),
            None => {
                // The pointer sits past the end of a shrunk list. Completion
                // must trigger rather than leave the index dangling.
                session.completed = true;
                Err(FlowError::SessionCompleted)
            }
        }
    }

    fn sync_completion(&self, session: &mut Session) {
        let total = self.active_questions(&session.responses).len();
        if session.step_index >= total {
            session.completed = true;
        }
    }

    /// Shape and constraint checks for an answer against a question.
    fn validate(
        &self,
        definition: &QuestionDefinition,
        answer: &Answer,
    ) -> Result<(), ValidationError> {
        let id = definition.id;
        match (&definition.kind, answer) {
            (QuestionKind::SingleChoice { .. }, Answer::Single(_)) => Ok(()),
            (QuestionKind::MultiChoice { max_selections, .. }, Answer::Multi(values)) => {
                if values.len() > *max_selections {
                    Err(ValidationError::TooManySelections {
                        id,
                        selected: values.len(),
                        max: *max_selections,
                    })
                } else {
                    Ok(())
                }
            }
            (QuestionKind::Slider { range }, Answer::Scale(value)) => {
                if range.contains(*value) {
                    Ok(())
                } else {
                    Err(ValidationError::OutOfRange {
                        id,
                        value: *value,
                        min: range.min,
                        max: range.max,
                    })
                }
            }
            _ => Err(ValidationError::KindMismatch { id }),
        }
    }
}

impl Default for FlowEngine {
    fn default() -> Self {
        Self::new()
    }
}
