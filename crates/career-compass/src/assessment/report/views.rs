use super::super::domain::{Axis, RiasecCode};
use super::super::mbti::PreferenceStrength;
use super::CareerReport;
use serde::Serialize;

/// Display-ready digest of a [`CareerReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub mbti_type: String,
    pub mbti_title: String,
    pub mbti_tagline: String,
    pub preference_strengths: Vec<PreferenceStrength>,
    pub riasec_code: String,
    pub riasec_names: String,
    pub top_strengths: String,
    pub workplace_traits: Vec<&'static str>,
    pub final_recommendations: Vec<String>,
    pub generated_at: String,
}

impl ReportSummary {
    pub(crate) fn from_report(report: &CareerReport) -> Self {
        let (mbti_title, mbti_tagline) = split_description(&report.mbti.description);

        Self {
            mbti_type: report.mbti.mbti_type.clone(),
            mbti_title,
            mbti_tagline,
            preference_strengths: report.mbti.preference_strengths(),
            riasec_code: format!(
                "{}-{}",
                report.riasec.dominant.label(),
                report.riasec.secondary.label()
            ),
            riasec_names: riasec_names(report.riasec.dominant, report.riasec.secondary),
            top_strengths: report
                .strengths
                .top_strengths
                .iter()
                .map(|strength| strength.label())
                .collect::<Vec<_>>()
                .join(" & "),
            workplace_traits: report
                .scenario
                .workplace_traits
                .iter()
                .map(|workplace_trait| workplace_trait.label())
                .collect(),
            final_recommendations: report.final_recommendations.clone(),
            generated_at: report.timestamp.clone(),
        }
    }
}

/// Profile descriptions read "The Title - tagline"; generic descriptions have
/// no title and are returned whole as the tagline.
fn split_description(description: &str) -> (String, String) {
    match description.split_once(" - ") {
        Some((title, tagline)) => (title.trim().to_string(), tagline.trim().to_string()),
        None => (String::new(), description.trim().to_string()),
    }
}

fn riasec_names(dominant: RiasecCode, secondary: RiasecCode) -> String {
    format!("{} & {}", dominant.name(), secondary.name())
}
