use health::dto::{HealthSnapshot, WearableMetrics};
use insights::{AiSummary, HealthInsights};

use crate::error::WebResult;
use crate::state::AppState;

/// Generate structured insights for a health snapshot via the AI gateway.
pub async fn generate_health_insights(
    state: &AppState,
    snapshot: &HealthSnapshot,
) -> WebResult<HealthInsights> {
    let insights = state.aggregator()?.health_insights(snapshot).await?;
    Ok(insights)
}

/// Generate a free-text summary for raw wearable metrics (legacy path).
pub async fn generate_wearable_summary(
    state: &AppState,
    metrics: &WearableMetrics,
) -> WebResult<AiSummary> {
    let summary = state.aggregator()?.wearable_summary(metrics).await?;
    Ok(summary)
}
