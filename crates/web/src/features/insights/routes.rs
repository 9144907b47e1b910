use axum::{Router, routing::post};

use crate::state::AppState;

use super::handlers::{generate_health_insights, generate_wearable_summary};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", post(generate_health_insights))
        .route("/summary", post(generate_wearable_summary))
}
