use super::catalog::{Question, QuestionCatalog};
use super::domain::{OptionKey, QuestionId, Section};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors raised while building or submitting an answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {0} is not part of the assessment")]
    UnknownQuestion(QuestionId),
    #[error("option {option} is not offered by question {question_id}")]
    InvalidOption {
        question_id: QuestionId,
        option: OptionKey,
    },
    #[error("{} question(s) still unanswered", missing.len())]
    Incomplete { missing: Vec<QuestionId> },
}

/// Question id -> selected option, validated against the standard catalog.
///
/// Absent ids are unanswered. Scorers only read the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<QuestionId, OptionKey>",
    into = "BTreeMap<QuestionId, OptionKey>"
)]
pub struct AnswerSet {
    selections: BTreeMap<QuestionId, OptionKey>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (QuestionId, OptionKey)>,
    {
        let mut answers = Self::new();
        for (question_id, option) in pairs {
            answers.answer(question_id, option)?;
        }
        Ok(answers)
    }

    /// Every catalog question answered with the same option, or with the
    /// closest offered option when the letter is outside a question's range.
    pub fn uniform(option: OptionKey) -> Self {
        let selections = QuestionCatalog::standard()
            .questions()
            .map(|question| {
                let chosen = if question.offers(option) {
                    option
                } else {
                    question
                        .options
                        .last()
                        .map(|last| last.key)
                        .unwrap_or(OptionKey::A)
                };
                (question.id, chosen)
            })
            .collect();
        Self { selections }
    }

    /// Records (or replaces) the selection for a question.
    pub fn answer(
        &mut self,
        question_id: QuestionId,
        option: OptionKey,
    ) -> Result<(), AnswerError> {
        let question = QuestionCatalog::standard()
            .question(question_id)
            .ok_or(AnswerError::UnknownQuestion(question_id))?;

        if !question.offers(option) {
            return Err(AnswerError::InvalidOption {
                question_id,
                option,
            });
        }

        self.selections.insert(question_id, option);
        Ok(())
    }

    pub fn remove(&mut self, question_id: QuestionId) -> Option<OptionKey> {
        self.selections.remove(&question_id)
    }

    pub fn get(&self, question_id: QuestionId) -> Option<OptionKey> {
        self.selections.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, OptionKey)> + '_ {
        self.selections
            .iter()
            .map(|(question_id, option)| (*question_id, *option))
    }

    /// First catalog question, in presentation order, without a selection.
    pub fn next_unanswered(&self) -> Option<&'static Question> {
        QuestionCatalog::standard()
            .questions()
            .find(|question| !self.selections.contains_key(&question.id))
    }

    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionCatalog::standard()
            .questions()
            .filter(|question| !self.selections.contains_key(&question.id))
            .map(|question| question.id)
            .collect()
    }

    pub fn ensure_complete(&self) -> Result<(), AnswerError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnswerError::Incomplete { missing })
        }
    }

    pub fn progress(&self) -> AssessmentProgress {
        let catalog = QuestionCatalog::standard();

        let sections: Vec<SectionProgress> = Section::ordered()
            .into_iter()
            .map(|section| {
                let questions = catalog.section(section);
                SectionProgress {
                    section,
                    label: section.label(),
                    answered: questions
                        .iter()
                        .filter(|question| self.selections.contains_key(&question.id))
                        .count(),
                    total: questions.len(),
                }
            })
            .collect();

        let answered: usize = sections.iter().map(|entry| entry.answered).sum();
        let total = catalog.len();
        let current_section = self
            .next_unanswered()
            .map(|question| question.section)
            .unwrap_or(Section::Scenario);

        AssessmentProgress {
            answered,
            total,
            percent_complete: percent(answered, total),
            current_section,
            complete: answered == total,
            sections,
        }
    }
}

impl TryFrom<BTreeMap<QuestionId, OptionKey>> for AnswerSet {
    type Error = AnswerError;

    fn try_from(value: BTreeMap<QuestionId, OptionKey>) -> Result<Self, Self::Error> {
        Self::from_pairs(value)
    }
}

impl From<AnswerSet> for BTreeMap<QuestionId, OptionKey> {
    fn from(value: AnswerSet) -> Self {
        value.selections
    }
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    ((part as f64 / whole as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub section: Section,
    pub label: &'static str,
    pub answered: usize,
    pub total: usize,
}

/// Snapshot of how far an answer set is through the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentProgress {
    pub answered: usize,
    pub total: usize,
    pub percent_complete: u8,
    pub current_section: Section,
    pub complete: bool,
    pub sections: Vec<SectionProgress>,
}
