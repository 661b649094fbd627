use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::info;

use super::answers::{AnswerError, AnswerSet, AssessmentProgress};
use super::domain::{OptionKey, QuestionId};
use super::engine::AssessmentEngine;
use super::mbti::MbtiResult;
use super::report::CareerReport;
use super::storage::{KeyValueStore, StorageError, StorageKey};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Answers(#[from] AnswerError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One respondent's walk through the questionnaire: answers persist after
/// every selection, submission stores the report, retake wipes both.
pub struct AssessmentSession<S> {
    store: Arc<S>,
    engine: AssessmentEngine,
    // Held across every load-modify-save so concurrent writers cannot drop
    // each other's answers.
    writes: Mutex<()>,
}

impl<S> AssessmentSession<S>
where
    S: KeyValueStore + 'static,
{
    pub fn new(store: Arc<S>, engine: AssessmentEngine) -> Self {
        Self {
            store,
            engine,
            writes: Mutex::new(()),
        }
    }

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    /// Answers saved so far; an empty set when nothing has been stored.
    pub fn answers(&self) -> Result<AnswerSet, SessionError> {
        let answers = self
            .store
            .load::<AnswerSet>(StorageKey::AssessmentAnswers)?
            .unwrap_or_default();
        Ok(answers)
    }

    /// Records (or changes) one selection and persists the full answer set.
    pub fn record(
        &self,
        question_id: QuestionId,
        option: OptionKey,
    ) -> Result<AssessmentProgress, SessionError> {
        let _guard = self.write_guard();
        let mut answers = self.answers()?;
        answers.answer(question_id, option)?;
        self.store.save(StorageKey::AssessmentAnswers, &answers)?;
        Ok(answers.progress())
    }

    pub fn progress(&self) -> Result<AssessmentProgress, SessionError> {
        Ok(self.answers()?.progress())
    }

    pub fn submit(&self) -> Result<CareerReport, SessionError> {
        self.submit_at(Utc::now())
    }

    /// Scores a complete answer set and stores the report alongside the
    /// standalone personality result.
    pub fn submit_at(&self, generated_at: DateTime<Utc>) -> Result<CareerReport, SessionError> {
        let _guard = self.write_guard();
        let answers = self.answers()?;
        answers.ensure_complete()?;

        let report = self.engine.report_at(&answers, generated_at);
        self.store.save(StorageKey::AssessmentResult, &report)?;
        self.store.save(StorageKey::MbtiResult, &report.mbti)?;

        info!(
            mbti = %report.mbti.mbti_type,
            riasec = %report.riasec.code(),
            recommendations = report.final_recommendations.len(),
            "assessment submitted"
        );
        Ok(report)
    }

    pub fn latest_report(&self) -> Result<Option<CareerReport>, SessionError> {
        Ok(self.store.load(StorageKey::AssessmentResult)?)
    }

    pub fn latest_mbti(&self) -> Result<Option<MbtiResult>, SessionError> {
        Ok(self.store.load(StorageKey::MbtiResult)?)
    }

    /// Discards stored answers and results so the questionnaire starts over.
    pub fn retake(&self) -> Result<(), SessionError> {
        let _guard = self.write_guard();
        for key in StorageKey::ordered() {
            self.store.remove(key)?;
        }
        info!("assessment reset for retake");
        Ok(())
    }
}
