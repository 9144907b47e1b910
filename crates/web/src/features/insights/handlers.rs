use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use health::dto::{HealthSnapshot, WearableMetrics};
use insights::{AiSummaryResponse, HealthInsightsResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/insights/health",
    request_body = HealthSnapshot,
    responses(
        (status = 200, description = "Structured insights generated successfully", body = HealthInsightsResponse),
        (status = 402, description = "AI gateway quota exhausted"),
        (status = 429, description = "AI gateway rate limit exceeded"),
        (status = 500, description = "Configuration, transport, or model response failure")
    ),
    tag = "insights"
)]
pub async fn generate_health_insights(
    State(state): State<AppState>,
    Json(snapshot): Json<HealthSnapshot>,
) -> Result<Response, WebError> {
    let insights = services::generate_health_insights(&state, &snapshot).await?;

    Ok(Json(HealthInsightsResponse::from(insights)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/insights/summary",
    request_body = WearableMetrics,
    responses(
        (status = 200, description = "Summary generated (possibly degraded to the generic fallback)", body = AiSummaryResponse),
        (status = 402, description = "AI gateway quota exhausted"),
        (status = 429, description = "AI gateway rate limit exceeded"),
        (status = 500, description = "Configuration, transport, or model response failure")
    ),
    tag = "insights"
)]
pub async fn generate_wearable_summary(
    State(state): State<AppState>,
    Json(metrics): Json<WearableMetrics>,
) -> Result<Response, WebError> {
    let summary = services::generate_wearable_summary(&state, &metrics).await?;

    Ok(Json(AiSummaryResponse::from(summary)).into_response())
}
