//! Career guidance questionnaire: the question catalog, per-section scorers,
//! the aggregated career report and the persisted answer/report flow.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod mbti;
pub mod report;
pub mod riasec;
pub mod router;
pub mod scenario;
pub mod session;
pub mod storage;
pub mod strengths;
pub(crate) mod tally;

#[cfg(test)]
mod tests;

pub use answers::{AnswerError, AnswerSet, AssessmentProgress, SectionProgress};
pub use catalog::{AnswerOption, Question, QuestionCatalog};
pub use domain::{
    Axis, MbtiLetter, OptionKey, ParseLabelError, QuestionId, RiasecCode, Section, Strength,
    WorkplaceTrait,
};
pub use engine::{AssessmentEngine, ScoringConfig, DEFAULT_MAX_RECOMMENDATIONS};
pub use mbti::{calculate_mbti_type, MbtiResult, PreferenceStrength};
pub use report::views::ReportSummary;
pub use report::{generate_career_report, generate_career_report_at, CareerReport};
pub use riasec::{calculate_riasec_type, RiasecResult};
pub use router::assessment_router;
pub use scenario::{calculate_scenario_results, ScenarioResult};
pub use session::{AssessmentSession, SessionError};
pub use storage::{InMemoryStore, JsonFileStore, KeyValueStore, StorageError, StorageKey};
pub use strengths::{calculate_strengths, StrengthsResult};
pub use tally::{AxisTally, TieBreak};
