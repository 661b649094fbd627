use super::answers::AnswerSet;
use super::catalog::STRENGTHS_QUESTIONS;
use super::domain::Strength;
use super::tally::{tally_pairs, AxisTally};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TOP_STRENGTHS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthsResult {
    pub scores: AxisTally<Strength>,
    pub top_strengths: Vec<Strength>,
    pub careers: Vec<String>,
}

pub fn careers_for_strength(strength: Strength) -> &'static [&'static str] {
    match strength {
        Strength::Resilience => &[
            "Emergency Services",
            "Crisis Manager",
            "Healthcare Professional",
            "Military Officer",
            "Entrepreneur",
        ],
        Strength::Organization => &[
            "Project Manager",
            "Executive Assistant",
            "Operations Manager",
            "Event Planner",
            "Logistics Coordinator",
        ],
        Strength::Creativity => &[
            "Designer",
            "Marketing Specialist",
            "Writer",
            "Innovation Consultant",
            "Product Developer",
        ],
        Strength::Leadership => &[
            "Manager",
            "Director",
            "Team Lead",
            "Executive",
            "Business Owner",
        ],
    }
}

/// Scores the strengths section, keeping the two highest-ranked traits.
pub fn calculate_strengths(answers: &AnswerSet) -> StrengthsResult {
    let scores: AxisTally<Strength> = tally_pairs(STRENGTHS_QUESTIONS, answers);
    let top_strengths = scores.top(TOP_STRENGTHS);

    // Duplicates across traits are kept; the report aggregator counts them.
    let careers = top_strengths
        .iter()
        .flat_map(|strength| careers_for_strength(*strength).iter())
        .map(|career| career.to_string())
        .collect();

    debug!(?top_strengths, "strengths ranked");

    StrengthsResult {
        scores,
        top_strengths,
        careers,
    }
}
