use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use health::models::{Recommendation, RiskFactor, RiskLevel};

/// Structured verdict produced by the model for the primary insights path.
/// A schema-conforming payload is passed through to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthInsights {
    pub risk_level: RiskLevel,
    /// Brief explanation of the risk level, one or two sentences.
    pub risk_explanation: String,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
}

/// Free-text summary produced by the legacy wearable-metrics path. Lower
/// confidence than [`HealthInsights`]: when the model's reply cannot be
/// parsed, a generic fallback is substituted instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AiSummary {
    pub summary: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Success envelope for the primary insights endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthInsightsResponse {
    pub success: bool,
    pub insights: HealthInsights,
}

impl From<HealthInsights> for HealthInsightsResponse {
    fn from(insights: HealthInsights) -> Self {
        Self {
            success: true,
            insights,
        }
    }
}

/// Success envelope for the legacy summary endpoint, flattened and camelCased
/// the way the original clients expect it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiSummaryResponse {
    pub success: bool,
    pub summary: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl From<AiSummary> for AiSummaryResponse {
    fn from(summary: AiSummary) -> Self {
        Self {
            success: true,
            summary: summary.summary,
            risk_level: summary.risk_level,
            recommendations: summary.recommendations,
        }
    }
}
