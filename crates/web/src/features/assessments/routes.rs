use axum::{Router, routing::post};

use crate::state::AppState;

use super::handlers::compute_risk_score;

pub fn routes() -> Router<AppState> {
    Router::new().route("/score", post(compute_risk_score))
}
