use career_compass::assessment::{AnswerSet, AssessmentEngine, OptionKey, Section};
use career_compass::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<AssessmentEngine>,
}

/// Reads a `{ "1": "A", ... }` answer file; ids and options are validated
/// while parsing.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}

pub(crate) fn parse_option(raw: &str) -> Result<OptionKey, String> {
    raw.parse::<OptionKey>().map_err(|err| err.to_string())
}

pub(crate) fn parse_section(raw: &str) -> Result<Section, String> {
    raw.parse::<Section>().map_err(|err| err.to_string())
}
