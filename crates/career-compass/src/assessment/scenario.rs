use super::answers::AnswerSet;
use super::catalog::SCENARIO_QUESTIONS;
use super::domain::{OptionKey, QuestionId, WorkplaceTrait};
use super::tally::AxisTally;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

pub const TOP_WORKPLACE_TRAITS: usize = 3;

/// First scenario question that uses the late option layout.
pub const SCENARIO_LAYOUT_BOUNDARY: QuestionId = 28;

/// Option letter -> trait for a contiguous block of scenario questions.
pub struct ScenarioOptionMap {
    pub question_ids: RangeInclusive<QuestionId>,
    /// Indexed by option position, A first.
    pub traits: [WorkplaceTrait; 5],
}

/// Scenario questions change what each letter means at
/// [`SCENARIO_LAYOUT_BOUNDARY`]. The recommendation phrases were written
/// against exactly this layout, so it is kept verbatim.
pub const SCENARIO_OPTION_TABLE: &[ScenarioOptionMap] = &[
    ScenarioOptionMap {
        question_ids: 24..=(SCENARIO_LAYOUT_BOUNDARY - 1),
        traits: [
            WorkplaceTrait::Leadership,
            WorkplaceTrait::Empathy,
            WorkplaceTrait::Creativity,
            WorkplaceTrait::Organization,
            WorkplaceTrait::Realism,
        ],
    },
    ScenarioOptionMap {
        question_ids: SCENARIO_LAYOUT_BOUNDARY..=30,
        traits: [
            WorkplaceTrait::Creativity,
            WorkplaceTrait::Leadership,
            WorkplaceTrait::Empathy,
            WorkplaceTrait::Organization,
            WorkplaceTrait::Realism,
        ],
    },
];

pub fn trait_for(question_id: QuestionId, option: OptionKey) -> Option<WorkplaceTrait> {
    SCENARIO_OPTION_TABLE
        .iter()
        .find(|map| map.question_ids.contains(&question_id))
        .map(|map| map.traits[option.index()])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scores: AxisTally<WorkplaceTrait>,
    pub workplace_traits: Vec<WorkplaceTrait>,
    pub workplace_recommendations: Vec<String>,
}

pub fn recommendations_for_trait(workplace_trait: WorkplaceTrait) -> &'static [&'static str] {
    match workplace_trait {
        WorkplaceTrait::Leadership => &[
            "Management positions",
            "Team lead roles",
            "Strategic positions",
            "Entrepreneurial ventures",
        ],
        WorkplaceTrait::Empathy => &[
            "Collaborative environments",
            "Support roles",
            "Customer-facing positions",
            "Mentorship opportunities",
        ],
        WorkplaceTrait::Organization => &[
            "Structured environments",
            "Process-oriented roles",
            "Detail-focused positions",
            "Planning roles",
        ],
        WorkplaceTrait::Creativity => &[
            "Innovation teams",
            "Design roles",
            "Research and development",
            "Creative industries",
        ],
        WorkplaceTrait::Realism => &[
            "Practical, hands-on roles",
            "Implementation positions",
            "Operational roles",
            "Technical positions",
        ],
    }
}

/// Scores the workplace scenario section, keeping the three highest-ranked traits.
pub fn calculate_scenario_results(answers: &AnswerSet) -> ScenarioResult {
    let mut scores = AxisTally::<WorkplaceTrait>::new();

    for question in SCENARIO_QUESTIONS {
        let Some(option) = answers.get(question.id) else {
            continue;
        };
        match trait_for(question.id, option) {
            Some(workplace_trait) => scores.increment(workplace_trait),
            None => debug!(
                question_id = question.id,
                "scenario question has no option map"
            ),
        }
    }

    let workplace_traits = scores.top(TOP_WORKPLACE_TRAITS);
    let workplace_recommendations = workplace_traits
        .iter()
        .flat_map(|workplace_trait| recommendations_for_trait(*workplace_trait).iter())
        .map(|phrase| phrase.to_string())
        .collect();

    debug!(?workplace_traits, "workplace traits ranked");

    ScenarioResult {
        scores,
        workplace_traits,
        workplace_recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_layout_shifts_at_boundary() {
        assert_eq!(
            trait_for(27, OptionKey::A),
            Some(WorkplaceTrait::Leadership)
        );
        assert_eq!(
            trait_for(28, OptionKey::A),
            Some(WorkplaceTrait::Creativity)
        );
        assert_eq!(
            trait_for(24, OptionKey::C),
            Some(WorkplaceTrait::Creativity)
        );
        assert_eq!(trait_for(30, OptionKey::C), Some(WorkplaceTrait::Empathy));
        assert_eq!(
            trait_for(29, OptionKey::D),
            Some(WorkplaceTrait::Organization)
        );
        assert_eq!(trait_for(23, OptionKey::A), None);
    }

    #[test]
    fn every_scenario_question_is_mapped() {
        for question in SCENARIO_QUESTIONS {
            assert!(
                trait_for(question.id, OptionKey::A).is_some(),
                "question {} unmapped",
                question.id
            );
        }
    }

    #[test]
    fn empty_answers_rank_in_declaration_order() {
        let result = calculate_scenario_results(&AnswerSet::new());
        assert_eq!(
            result.workplace_traits,
            vec![
                WorkplaceTrait::Leadership,
                WorkplaceTrait::Empathy,
                WorkplaceTrait::Organization,
            ]
        );
        assert_eq!(result.workplace_recommendations.len(), 12);
        assert_eq!(
            result.workplace_recommendations[4],
            "Collaborative environments"
        );
    }

    #[test]
    fn all_a_answers_split_leadership_and_creativity() {
        let result = calculate_scenario_results(&AnswerSet::uniform(OptionKey::A));
        assert_eq!(result.scores.get(WorkplaceTrait::Leadership), 4);
        assert_eq!(result.scores.get(WorkplaceTrait::Creativity), 3);
        assert_eq!(
            result.workplace_traits,
            vec![
                WorkplaceTrait::Leadership,
                WorkplaceTrait::Creativity,
                WorkplaceTrait::Empathy,
            ]
        );
    }

    #[test]
    fn all_c_answers_follow_the_late_layout() {
        let result = calculate_scenario_results(&AnswerSet::uniform(OptionKey::C));
        assert_eq!(result.scores.get(WorkplaceTrait::Creativity), 4);
        assert_eq!(result.scores.get(WorkplaceTrait::Empathy), 3);
        assert_eq!(
            result.workplace_traits,
            vec![
                WorkplaceTrait::Creativity,
                WorkplaceTrait::Empathy,
                WorkplaceTrait::Leadership,
            ]
        );
    }
}
