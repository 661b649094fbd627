use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::{OptionKey, RiasecCode, Strength, WorkplaceTrait};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::report::generate_career_report_at;

use super::common::fixed_instant;

fn answers(pairs: &[(u32, OptionKey)]) -> AnswerSet {
    AnswerSet::from_pairs(pairs.iter().copied()).expect("fixture answers are valid")
}

#[test]
fn all_second_options_produce_the_enfp_profile() {
    let report = generate_career_report_at(&AnswerSet::uniform(OptionKey::B), fixed_instant());

    assert_eq!(report.mbti.mbti_type, "ENFP");
    assert_eq!(report.riasec.code(), "IS");
    assert_eq!(
        report.strengths.top_strengths,
        vec![Strength::Creativity, Strength::Organization]
    );
    assert_eq!(
        report.scenario.workplace_traits,
        vec![
            WorkplaceTrait::Empathy,
            WorkplaceTrait::Leadership,
            WorkplaceTrait::Organization
        ]
    );
    assert_eq!(
        report.final_recommendations,
        vec![
            "Event Planner",
            "Marketing Specialist",
            "Creative Director",
            "Journalist",
            "Career Counselor",
            "Physician",
            "Psychologist",
            "Pharmacist",
            "Nutritionist",
        ]
    );
}

#[test]
fn scenario_layout_switches_at_question_twenty_eight() {
    let engine = AssessmentEngine::standard();
    let result = engine.scenario(&answers(&[
        (24, OptionKey::A),
        (25, OptionKey::B),
        (28, OptionKey::A),
        (29, OptionKey::A),
        (30, OptionKey::D),
    ]));

    assert_eq!(result.scores.get(WorkplaceTrait::Creativity), 2);
    assert_eq!(result.scores.get(WorkplaceTrait::Leadership), 1);
    assert_eq!(result.scores.get(WorkplaceTrait::Organization), 1);
    assert_eq!(result.scores.get(WorkplaceTrait::Realism), 0);
    assert_eq!(
        result.workplace_traits,
        vec![
            WorkplaceTrait::Creativity,
            WorkplaceTrait::Leadership,
            WorkplaceTrait::Empathy
        ]
    );
    assert_eq!(result.workplace_recommendations.len(), 12);
    assert_eq!(result.workplace_recommendations[0], "Innovation teams");
}

#[test]
fn partial_interest_answers_rank_by_votes() {
    let result = AssessmentEngine::standard().riasec(&answers(&[
        (9, OptionKey::B),
        (10, OptionKey::B),
        (11, OptionKey::A),
        (12, OptionKey::B),
    ]));

    assert_eq!(result.dominant, RiasecCode::I);
    assert_eq!(result.secondary, RiasecCode::S);
    assert_eq!(result.scores.get(RiasecCode::I), 2);
    assert_eq!(result.scores.total(), 4);
    assert_eq!(result.careers[0], "Physician");
}

#[test]
fn sections_ignore_answers_from_other_sections() {
    let engine = AssessmentEngine::standard();
    let only_scenarios = answers(&[(24, OptionKey::E), (27, OptionKey::E)]);

    assert_eq!(engine.mbti(&only_scenarios).details.total(), 0);
    assert_eq!(engine.riasec(&only_scenarios).scores.total(), 0);
    assert_eq!(engine.strengths(&only_scenarios).scores.total(), 0);
    assert_eq!(
        engine
            .scenario(&only_scenarios)
            .scores
            .get(WorkplaceTrait::Realism),
        2
    );
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = generate_career_report_at(&AnswerSet::uniform(OptionKey::A), fixed_instant());
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["mbti"]["type"], "ISTJ");
    assert_eq!(value["mbti"]["details"]["E"], 0);
    assert_eq!(value["riasec"]["dominant"], "R");
    assert_eq!(value["strengths"]["topStrengths"][0], "Leadership");
    assert_eq!(value["scenario"]["workplaceTraits"][2], "Empathy");
    assert_eq!(value["finalRecommendations"][0], "Accountant");
    assert_eq!(value["timestamp"], "2025-06-02T14:30:00.000Z");
}
