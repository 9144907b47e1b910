use axum::{
    Json,
    response::{IntoResponse, Response},
};
use health::dto::HealthSnapshot;
use health::models::RiskAssessment;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/assessments/score",
    request_body = HealthSnapshot,
    responses(
        (status = 200, description = "Deterministic risk assessment computed", body = RiskAssessment)
    ),
    tag = "assessments"
)]
pub async fn compute_risk_score(
    Json(snapshot): Json<HealthSnapshot>,
) -> Result<Response, WebError> {
    let assessment = services::compute_risk_score(&snapshot);

    Ok(Json(assessment).into_response())
}
