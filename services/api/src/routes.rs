use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use career_compass::assessment::{
    assessment_router, AnswerSet, AssessmentProgress, AssessmentSession, CareerReport,
    KeyValueStore, ReportSummary,
};
use career_compass::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) allow_partial: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) progress: AssessmentProgress,
    pub(crate) summary: ReportSummary,
    pub(crate) report: CareerReport,
}

pub(crate) fn with_service_routes<S>(session: Arc<AssessmentSession<S>>) -> axum::Router
where
    S: KeyValueStore + 'static,
{
    assessment_router(session)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless scoring: nothing is persisted.
pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        answers,
        allow_partial,
    } = payload;

    if !allow_partial {
        answers.ensure_complete()?;
    }

    let report = state.engine.report(&answers);
    info!(
        answered = answers.len(),
        mbti = %report.mbti.mbti_type,
        "scored answer set"
    );

    Ok(Json(ScoreResponse {
        progress: answers.progress(),
        summary: report.summary(),
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::assessment::{AssessmentEngine, OptionKey, ScoringConfig};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;

    fn app_state(ready: bool, config: ScoringConfig) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            engine: Arc::new(AssessmentEngine::new(config)),
        }
    }

    #[tokio::test]
    async fn score_endpoint_returns_report_and_summary() {
        let request = ScoreRequest {
            answers: AnswerSet::uniform(OptionKey::A),
            allow_partial: false,
        };

        let Json(body) = score_endpoint(
            Extension(app_state(true, ScoringConfig::default())),
            Json(request),
        )
        .await
        .expect("complete answers score");

        assert!(body.progress.complete);
        assert_eq!(body.summary.riasec_code, "R-A");
        assert_eq!(body.report.mbti.mbti_type, "ISTJ");
        assert_eq!(body.report.final_recommendations.len(), 9);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_incomplete_answers_by_default() {
        let request = ScoreRequest {
            answers: AnswerSet::from_pairs([(1, OptionKey::B)]).expect("valid"),
            allow_partial: false,
        };

        let error = score_endpoint(
            Extension(app_state(true, ScoringConfig::default())),
            Json(request),
        )
        .await
        .err()
        .expect("incomplete answers rejected");

        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn partial_scoring_honours_configured_limit() {
        let config = ScoringConfig {
            max_recommendations: 3,
            ..ScoringConfig::default()
        };
        let request: ScoreRequest =
            serde_json::from_str(r#"{ "answers": { "9": "B", "10": "B" }, "allow_partial": true }"#)
                .expect("request parses");

        let Json(body) = score_endpoint(Extension(app_state(true, config)), Json(request))
            .await
            .expect("partial answers score");

        assert!(!body.progress.complete);
        assert_eq!(body.progress.answered, 2);
        assert_eq!(body.report.final_recommendations.len(), 3);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let pending = readiness_endpoint(Extension(app_state(false, ScoringConfig::default())))
            .await
            .into_response();
        assert_eq!(pending.status(), StatusCode::SERVICE_UNAVAILABLE);

        let ready = readiness_endpoint(Extension(app_state(true, ScoringConfig::default())))
            .await
            .into_response();
        assert_eq!(ready.status(), StatusCode::OK);
    }
}
