use std::collections::HashSet;

use career_compass::assessment::{
    calculate_mbti_type, calculate_riasec_type, calculate_scenario_results, calculate_strengths,
    generate_career_report, AnswerSet, Axis, AxisTally, CareerReport, OptionKey, Question,
    QuestionCatalog, RiasecCode, Section, Strength, WorkplaceTrait, DEFAULT_MAX_RECOMMENDATIONS,
};

#[test]
fn catalog_has_thirty_questions_in_four_sections() {
    let catalog = QuestionCatalog::standard();
    assert_eq!(catalog.len(), 30);

    let sizes: Vec<usize> = Section::ordered()
        .into_iter()
        .map(|section| catalog.section(section).len())
        .collect();
    assert_eq!(sizes, vec![8, 8, 7, 7]);

    let ids: Vec<u32> = catalog.questions().map(|question| question.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
}

#[test]
fn empty_answers_fall_back_to_literal_defaults() {
    let answers = AnswerSet::new();

    assert_eq!(calculate_mbti_type(&answers).mbti_type, "ISTJ");

    let riasec = calculate_riasec_type(&answers);
    assert_eq!(riasec.dominant, RiasecCode::R);
    assert_eq!(riasec.secondary, RiasecCode::I);

    assert_eq!(
        calculate_strengths(&answers).top_strengths,
        vec![Strength::Resilience, Strength::Organization]
    );
    assert_eq!(
        calculate_scenario_results(&answers).workplace_traits,
        vec![
            WorkplaceTrait::Leadership,
            WorkplaceTrait::Empathy,
            WorkplaceTrait::Organization
        ]
    );

    let report = generate_career_report(&answers);
    assert_eq!(
        report.final_recommendations,
        vec![
            "Project Manager",
            "Accountant",
            "Financial Analyst",
            "Quality Assurance Specialist",
            "Database Administrator",
            "Research Scientist",
            "Medical Researcher",
            "Engineer",
            "Technical Analyst",
        ],
        "project manager appears in both the ISTJ and organization lists"
    );
}

#[test]
fn all_first_options_produce_the_expected_report() {
    let report = generate_career_report(&AnswerSet::uniform(OptionKey::A));

    assert_eq!(report.mbti.mbti_type, "ISTJ");
    assert_eq!(report.riasec.code(), "RA");
    assert_eq!(
        report.strengths.top_strengths,
        vec![Strength::Leadership, Strength::Resilience]
    );
    assert_eq!(
        report.final_recommendations,
        vec![
            "Accountant",
            "Project Manager",
            "Financial Analyst",
            "Quality Assurance Specialist",
            "Database Administrator",
            "Architect",
            "Technical Designer",
            "Audio Engineer",
            "Carpenter",
        ]
    );
}

#[test]
fn scoring_is_idempotent_apart_from_the_timestamp() {
    for option in OptionKey::ordered() {
        let answers = AnswerSet::uniform(option);
        let first = generate_career_report(&answers);
        let second = generate_career_report(&answers);
        assert_eq!(first.without_timestamp(), second.without_timestamp());
        assert!(first.final_recommendations.len() <= 9);
        assert_eq!(first.mbti.mbti_type.len(), 4);
    }
}

#[test]
fn stored_reports_round_trip_through_json() {
    let report = generate_career_report(&AnswerSet::uniform(OptionKey::C));
    let json = serde_json::to_string(&report).expect("report serializes");
    let restored: CareerReport = serde_json::from_str(&json).expect("report deserializes");
    assert_eq!(restored, report);
}

const FILL_PATTERNS: usize = 8;

/// One way a respondent might fill in a section, keyed by position within it.
fn fill(pattern: usize, index: usize, question: &Question) -> Option<OptionKey> {
    let pick = |offset: usize| Some(question.options[offset % question.options.len()].key);
    match pattern {
        1 => pick(0),
        2 => pick(question.options.len() - 1),
        3 => pick(index),
        4 => pick(index + 1),
        5 => pick(index * 2 + 1),
        6 if index < 4 => pick(index),
        7 if index % 3 != 2 => pick(index / 3),
        _ => None,
    }
}

fn answers_for(patterns: [usize; 4]) -> AnswerSet {
    let catalog = QuestionCatalog::standard();
    let mut answers = AnswerSet::new();
    for (section, pattern) in Section::ordered().into_iter().zip(patterns) {
        for (index, question) in catalog.section(section).iter().enumerate() {
            if let Some(option) = fill(pattern, index, question) {
                answers.answer(question.id, option).expect("catalog option");
            }
        }
    }
    answers
}

fn answer_combinations() -> Vec<AnswerSet> {
    let mut combinations = Vec::new();
    for mbti in 0..FILL_PATTERNS {
        for riasec in 0..FILL_PATTERNS {
            for strengths in 0..FILL_PATTERNS {
                for scenario in 0..FILL_PATTERNS {
                    combinations.push(answers_for([mbti, riasec, strengths, scenario]));
                }
            }
        }
    }
    combinations
}

fn assert_ranked<T: Axis>(picked: &[T], scores: &AxisTally<T>, expected_len: usize) {
    assert_eq!(picked.len(), expected_len);
    let distinct: HashSet<T> = picked.iter().copied().collect();
    assert_eq!(distinct.len(), picked.len(), "duplicates in {picked:?}");

    for pair in picked.windows(2) {
        assert!(
            scores.get(pair[0]) >= scores.get(pair[1]),
            "{picked:?} is not descending"
        );
    }
    let floor = picked.last().map_or(0, |last| scores.get(*last));
    for skipped in T::ORDERED.iter().filter(|axis| !distinct.contains(*axis)) {
        assert!(
            scores.get(*skipped) <= floor,
            "{skipped:?} outranks {picked:?}"
        );
    }
}

#[test]
fn reports_hold_their_invariants_across_answer_combinations() {
    let combinations = answer_combinations();
    assert_eq!(combinations.len(), FILL_PATTERNS.pow(4));

    for answers in &combinations {
        let report = generate_career_report(answers);

        assert_ne!(report.riasec.dominant, report.riasec.secondary);
        assert_eq!(report.mbti.mbti_type.len(), 4);
        assert_ranked(&report.strengths.top_strengths, &report.strengths.scores, 2);
        assert_ranked(
            &report.scenario.workplace_traits,
            &report.scenario.scores,
            3,
        );

        let sources: HashSet<&str> = report
            .mbti
            .careers
            .iter()
            .chain(&report.riasec.careers)
            .chain(&report.strengths.careers)
            .map(String::as_str)
            .collect();
        let recommended: HashSet<&str> = report
            .final_recommendations
            .iter()
            .map(String::as_str)
            .collect();
        assert!(!recommended.is_empty());
        assert!(report.final_recommendations.len() <= DEFAULT_MAX_RECOMMENDATIONS);
        assert_eq!(recommended.len(), report.final_recommendations.len());
        assert!(
            recommended.is_subset(&sources),
            "{:?} has careers outside its section lists",
            report.final_recommendations
        );
    }
}
