use crate::demo::evaluate_match;
use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use hiring_intel::error::AppError;
use hiring_intel::workflows::views::{
    AssistantReplyView, EngagementView, InterviewDecisionView, MatchView,
};
use hiring_intel::workflows::{
    assess_engagement, evaluate_feedback, interactions_from, reply, ExecutiveSnapshot,
    ValidationError,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct MatchRequest {
    #[serde(default)]
    pub(crate) job_description: String,
    #[serde(default)]
    pub(crate) resume: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterviewRequest {
    #[serde(default)]
    pub(crate) feedback: String,
}

/// Taken as a wide integer so negative or oversized counts reach range validation.
#[derive(Debug, Deserialize)]
pub(crate) struct EngagementRequest {
    #[serde(default)]
    pub(crate) interactions: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AskRequest {
    #[serde(default)]
    pub(crate) query: String,
}

/// Every route the service exposes. Health, readiness and metrics endpoints expect an `Extension<AppState>` layer.
pub(crate) fn hiring_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/talent/match", post(match_endpoint))
        .route("/api/v1/interview/decision", post(interview_endpoint))
        .route("/api/v1/engagement/risk", post(engagement_endpoint))
        .route("/api/v1/assistant/ask", post(assistant_endpoint))
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

pub(crate) async fn dashboard_endpoint() -> Json<ExecutiveSnapshot> {
    Json(ExecutiveSnapshot::standard())
}

pub(crate) async fn match_endpoint(
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchView>, AppError> {
    let Json(payload) = payload?;
    let view = evaluate_match(&payload.job_description, &payload.resume)?;
    Ok(Json(view))
}

pub(crate) async fn interview_endpoint(
    payload: Result<Json<InterviewRequest>, JsonRejection>,
) -> Result<Json<InterviewDecisionView>, AppError> {
    let Json(payload) = payload?;
    let outcome = evaluate_feedback(&payload.feedback)?;
    Ok(Json(outcome.into()))
}

pub(crate) async fn engagement_endpoint(
    payload: Result<Json<EngagementRequest>, JsonRejection>,
) -> Result<Json<EngagementView>, AppError> {
    let Json(payload) = payload?;
    let raw = payload.interactions.ok_or(ValidationError::EmptyField {
        field: "interactions",
    })?;
    let outcome = assess_engagement(interactions_from(raw)?)?;
    Ok(Json(outcome.into()))
}

pub(crate) async fn assistant_endpoint(
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AssistantReplyView>, AppError> {
    let Json(payload) = payload?;
    let answer = reply(&payload.query).ok_or(ValidationError::EmptyField { field: "query" })?;
    Ok(Json(answer.into()))
}
