use crate::infra::{parse_answers, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use interview_ready::assessment::{calculate_results, AssessmentResult, SkillCatalog};
use interview_ready::error::AppError;
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    #[serde(flatten)]
    pub(crate) result: AssessmentResult,
    pub(crate) share_summary: String,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/catalog", get(catalog_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
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

pub(crate) async fn catalog_endpoint() -> Json<SkillCatalog> {
    Json(SkillCatalog::standard())
}

/// Takes the raw body so malformed and out-of-range documents both surface
/// as 400 through `AppError`.
pub(crate) async fn assessment_endpoint(body: String) -> Result<Json<AssessmentResponse>, AppError> {
    let answers = parse_answers(&body)?;
    let result = calculate_results(&answers);
    info!(
        overall_score = result.overall_score,
        readiness = result.readiness_level.label(),
        "assessment scored"
    );

    let share_summary = result.share_summary();
    Ok(Json(AssessmentResponse {
        result,
        share_summary,
    }))
}
