use super::super::answers::AnswerSet;
use super::super::engine::{AssessmentEngine, DEFAULT_MAX_RECOMMENDATIONS};
use super::super::mbti::MbtiResult;
use super::super::riasec::RiasecResult;
use super::super::scenario::ScenarioResult;
use super::super::strengths::StrengthsResult;
use super::views::ReportSummary;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Combined outcome of one assessment submission. A retake produces a new
/// report rather than updating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerReport {
    pub mbti: MbtiResult,
    pub riasec: RiasecResult,
    pub strengths: StrengthsResult,
    pub scenario: ScenarioResult,
    pub final_recommendations: Vec<String>,
    pub timestamp: String,
}

impl CareerReport {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_report(self)
    }

    /// The report with its timestamp cleared, for comparing two scorings of
    /// the same answers.
    pub fn without_timestamp(&self) -> Self {
        Self {
            timestamp: String::new(),
            ..self.clone()
        }
    }
}

/// Orders distinct career titles by how often they occur, keeping first-seen
/// order among equal counts, and keeps at most `limit`.
pub fn rank_recommendations<'a, I>(careers: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for career in careers {
        match positions.get(career) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(career, counts.len());
                counts.push((career, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(career, _)| career.to_string())
        .collect()
}

pub(crate) fn assemble_report(
    mbti: MbtiResult,
    riasec: RiasecResult,
    strengths: StrengthsResult,
    scenario: ScenarioResult,
    max_recommendations: usize,
    generated_at: DateTime<Utc>,
) -> CareerReport {
    // Scenario phrases describe environments, not job titles, so they stay out
    // of the merge.
    let final_recommendations = rank_recommendations(
        mbti.careers
            .iter()
            .chain(&riasec.careers)
            .chain(&strengths.careers)
            .map(String::as_str),
        max_recommendations.clamp(1, DEFAULT_MAX_RECOMMENDATIONS),
    );

    debug!(
        mbti = %mbti.mbti_type,
        riasec = %riasec.code(),
        recommendations = final_recommendations.len(),
        "career report assembled"
    );

    CareerReport {
        mbti,
        riasec,
        strengths,
        scenario,
        final_recommendations,
        timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Runs every section scorer over one answer set and merges their careers.
pub fn generate_career_report(answers: &AnswerSet) -> CareerReport {
    AssessmentEngine::standard().report(answers)
}

pub fn generate_career_report_at(answers: &AnswerSet, generated_at: DateTime<Utc>) -> CareerReport {
    AssessmentEngine::standard().report_at(answers, generated_at)
}
