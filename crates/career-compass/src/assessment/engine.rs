use super::answers::AnswerSet;
use super::mbti::{score_mbti, MbtiResult};
use super::report::{assemble_report, CareerReport};
use super::riasec::{calculate_riasec_type, RiasecResult};
use super::scenario::{calculate_scenario_results, ScenarioResult};
use super::strengths::{calculate_strengths, StrengthsResult};
use super::tally::{TieBreak, DICHOTOMY_TIE_BREAK};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on merged recommendations; also the default.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 9;

/// Knobs controlling how tallies become results. Section result sizes are
/// fixed; only the dichotomy tie-break and the merged list length vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub tie_break: TieBreak,
    /// Clamped to `1..=DEFAULT_MAX_RECOMMENDATIONS` when a report is built.
    pub max_recommendations: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tie_break: DICHOTOMY_TIE_BREAK,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

/// Stateless scorer that applies a [`ScoringConfig`] to answer sets.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    config: ScoringConfig,
}

impl AssessmentEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn mbti(&self, answers: &AnswerSet) -> MbtiResult {
        score_mbti(answers, self.config.tie_break)
    }

    pub fn riasec(&self, answers: &AnswerSet) -> RiasecResult {
        calculate_riasec_type(answers)
    }

    pub fn strengths(&self, answers: &AnswerSet) -> StrengthsResult {
        calculate_strengths(answers)
    }

    pub fn scenario(&self, answers: &AnswerSet) -> ScenarioResult {
        calculate_scenario_results(answers)
    }

    pub fn report(&self, answers: &AnswerSet) -> CareerReport {
        self.report_at(answers, Utc::now())
    }

    pub fn report_at(&self, answers: &AnswerSet, generated_at: DateTime<Utc>) -> CareerReport {
        assemble_report(
            self.mbti(answers),
            self.riasec(answers),
            self.strengths(answers),
            self.scenario(answers),
            self.config.max_recommendations,
            generated_at,
        )
    }
}
