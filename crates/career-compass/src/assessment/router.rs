use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::answers::AnswerError;
use super::catalog::{Question, QuestionCatalog};
use super::domain::{OptionKey, QuestionId, Section};
use super::session::{AssessmentSession, SessionError};
use super::storage::KeyValueStore;

#[derive(Debug, Deserialize)]
pub struct RecordAnswerRequest {
    pub option: OptionKey,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub section: Section,
    pub number: usize,
    pub label: &'static str,
    pub questions: &'static [Question],
}

#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub total: usize,
    pub sections: Vec<SectionView>,
}

impl CatalogView {
    pub fn standard() -> Self {
        let catalog = QuestionCatalog::standard();
        Self {
            total: catalog.len(),
            sections: Section::ordered()
                .into_iter()
                .map(|section| SectionView {
                    section,
                    number: section.number(),
                    label: section.label(),
                    questions: catalog.section(section),
                })
                .collect(),
        }
    }
}

/// Router exposing the questionnaire flow: fetch questions, record answers,
/// submit, read the stored report and reset for a retake.
pub fn assessment_router<S>(session: Arc<AssessmentSession<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/answers", get(answers_handler::<S>))
        .route(
            "/api/v1/assessment/answers/:question_id",
            put(record_handler::<S>),
        )
        .route("/api/v1/assessment/submit", post(submit_handler::<S>))
        .route("/api/v1/assessment/report", get(report_handler::<S>))
        .route("/api/v1/assessment", delete(retake_handler::<S>))
        .with_state(session)
}

pub(crate) async fn questions_handler() -> Response {
    (StatusCode::OK, axum::Json(CatalogView::standard())).into_response()
}

pub(crate) async fn answers_handler<S>(State(session): State<Arc<AssessmentSession<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    match with_session(session, |session| session.answers()).await {
        Ok(answers) => {
            let payload = json!({
                "progress": answers.progress(),
                "answers": answers,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn record_handler<S>(
    State(session): State<Arc<AssessmentSession<S>>>,
    Path(question_id): Path<QuestionId>,
    axum::Json(request): axum::Json<RecordAnswerRequest>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    let option = request.option;
    match with_session(session, move |session| session.record(question_id, option)).await {
        Ok(progress) => (StatusCode::OK, axum::Json(progress)).into_response(),
        Err(response) => response,
    }
}

pub(crate) async fn submit_handler<S>(State(session): State<Arc<AssessmentSession<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    match with_session(session, |session| session.submit()).await {
        Ok(report) => (StatusCode::CREATED, axum::Json(report)).into_response(),
        Err(response) => response,
    }
}

pub(crate) async fn report_handler<S>(State(session): State<Arc<AssessmentSession<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    match with_session(session, |session| session.latest_report()).await {
        Ok(Some(report)) => (StatusCode::OK, axum::Json(report)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "no assessment has been submitted",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn retake_handler<S>(State(session): State<Arc<AssessmentSession<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    match with_session(session, |session| session.retake()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(response) => response,
    }
}

/// Runs a session call on the blocking pool, since stores may do synchronous
/// filesystem IO.
async fn with_session<S, T, F>(
    session: Arc<AssessmentSession<S>>,
    operation: F,
) -> Result<T, Response>
where
    S: KeyValueStore + 'static,
    T: Send + 'static,
    F: FnOnce(&AssessmentSession<S>) -> Result<T, SessionError> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || operation(&session)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(other)) => Err(session_error_response(other)),
        Err(join_error) => {
            error!(error = %join_error, "assessment session task failed");
            let payload = json!({
                "error": "assessment session task failed",
            });
            Err((StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response())
        }
    }
}

fn session_error_response(error: SessionError) -> Response {
    match error {
        SessionError::Answers(AnswerError::UnknownQuestion(question_id)) => {
            let payload = json!({
                "error": format!("question {question_id} is not part of the assessment"),
                "question_id": question_id,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        SessionError::Answers(AnswerError::Incomplete { ref missing }) => {
            let payload = json!({
                "error": error.to_string(),
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        SessionError::Answers(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        SessionError::Storage(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
