use std::sync::Arc;

use serde::Deserialize;

use health::dto::{HealthSnapshot, WearableMetrics};
use health::models::RiskLevel;

use crate::context::ContextBuilder;
use crate::error::Result;
use crate::gateway::{GatewayClient, GatewayConfig};
use crate::models::{AiSummary, HealthInsights};
use crate::traits::InsightGenerator;

/// Fixed recommendations substituted when the legacy path cannot parse the
/// model's reply as JSON.
const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Consult with a healthcare professional",
    "Monitor your vitals regularly",
    "Maintain a healthy lifestyle",
];

/// Drives the model-backed insight paths. Holds no state beyond the generator
/// handle: every call is parameterized solely by the data passed in, so
/// concurrent invocations for different users share nothing mutable.
pub struct InsightAggregator {
    generator: Arc<dyn InsightGenerator>,
}

impl InsightAggregator {
    pub fn new(generator: Arc<dyn InsightGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_gateway(config: GatewayConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(GatewayClient::new(config)?)))
    }

    /// Primary structured path: build the context, make exactly one model
    /// call, and pass a schema-conforming payload through unchanged. Every
    /// failure propagates as its own [`crate::InsightError`] variant; there is
    /// no silent default and no retry.
    pub async fn health_insights(&self, snapshot: &HealthSnapshot) -> Result<HealthInsights> {
        let prompt = ContextBuilder::insights_prompt(snapshot);
        tracing::info!(
            "Generating health insights (vitals: {}, environment: {}, parents: {})",
            snapshot.vitals.is_some(),
            snapshot.environment.is_some(),
            snapshot.parents.len()
        );

        self.generator.generate_insights(&prompt).await
    }

    /// Legacy path over raw wearable metrics. Transport and upstream errors
    /// still propagate, but an unparseable reply degrades to the raw text
    /// plus a generic recommendation set — callers must treat this output as
    /// lower confidence than [`Self::health_insights`].
    pub async fn wearable_summary(&self, metrics: &WearableMetrics) -> Result<AiSummary> {
        let prompt = ContextBuilder::summary_prompt(metrics);
        tracing::info!("Generating wearable summary");

        let text = self.generator.generate_text(&prompt).await?;
        Ok(parse_summary(&text))
    }
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    summary: String,
    #[serde(rename = "riskLevel")]
    risk_level: String,
    recommendations: Vec<String>,
}

/// The model is asked for JSON but may wrap it in markdown or prose; search
/// for a brace-delimited substring and fall back to a fixed generic verdict
/// when none parses.
fn parse_summary(text: &str) -> AiSummary {
    if let Some(block) = extract_json_block(text)
        && let Ok(raw) = serde_json::from_str::<RawSummary>(block)
    {
        return AiSummary {
            summary: raw.summary,
            risk_level: raw.risk_level.parse().unwrap_or(RiskLevel::Medium),
            recommendations: raw.recommendations,
        };
    }

    AiSummary {
        summary: text.to_string(),
        risk_level: RiskLevel::Medium,
        recommendations: FALLBACK_RECOMMENDATIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsightError;
    use health::models::{FactorStatus, Priority, Recommendation, RiskFactor};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn canned_insights() -> HealthInsights {
        HealthInsights {
            risk_level: RiskLevel::Low,
            risk_explanation: "All metrics are within normal ranges.".to_string(),
            risk_factors: vec![RiskFactor {
                factor: "Stable heart rate".to_string(),
                status: FactorStatus::Positive,
            }],
            recommendations: vec![Recommendation {
                title: "Keep it up".to_string(),
                description: "Maintain your current routine.".to_string(),
                priority: Priority::Low,
            }],
        }
    }

    /// Generator fake that counts invocations and replies with canned data.
    struct CannedGenerator {
        insights: HealthInsights,
        text: String,
        calls: AtomicUsize,
    }

    impl CannedGenerator {
        fn new(text: &str) -> Self {
            Self {
                insights: canned_insights(),
                text: text.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl InsightGenerator for CannedGenerator {
        async fn generate_insights(&self, _context: &str) -> Result<HealthInsights> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.insights.clone())
        }

        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait::async_trait]
    impl InsightGenerator for FailingGenerator {
        async fn generate_insights(&self, _context: &str) -> Result<HealthInsights> {
            Err(InsightError::RateLimited)
        }

        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            Err(InsightError::RateLimited)
        }
    }

    #[tokio::test]
    async fn test_conforming_payload_passes_through_unchanged() {
        let generator = Arc::new(CannedGenerator::new(""));
        let aggregator = InsightAggregator::new(generator.clone());

        let insights = aggregator
            .health_insights(&HealthSnapshot::default())
            .await
            .unwrap();

        assert_eq!(insights, canned_insights());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generator_errors_propagate_distinctly() {
        let aggregator = InsightAggregator::new(Arc::new(FailingGenerator));

        let err = aggregator
            .health_insights(&HealthSnapshot::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, InsightError::RateLimited));

        let err = aggregator
            .wearable_summary(&WearableMetrics::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, InsightError::RateLimited));
    }

    #[tokio::test]
    async fn test_wearable_summary_parses_json_reply() {
        let reply = r#"{"summary": "Heart rate is mildly elevated.", "riskLevel": "Low", "recommendations": ["Hydrate", "Rest"]}"#;
        let aggregator = InsightAggregator::new(Arc::new(CannedGenerator::new(reply)));

        let summary = aggregator
            .wearable_summary(&WearableMetrics::default())
            .await
            .unwrap();

        assert_eq!(summary.summary, "Heart rate is mildly elevated.");
        assert_eq!(summary.risk_level, RiskLevel::Low);
        assert_eq!(summary.recommendations, vec!["Hydrate", "Rest"]);
    }

    #[test]
    fn test_parse_summary_finds_json_inside_markdown() {
        let text = "Here you go:\n```json\n{\"summary\": \"Fine.\", \"riskLevel\": \"high\", \"recommendations\": []}\n```";
        let summary = parse_summary(text);
        assert_eq!(summary.summary, "Fine.");
        assert_eq!(summary.risk_level, RiskLevel::High);
        assert!(summary.recommendations.is_empty());
    }

    #[test]
    fn test_parse_summary_without_json_falls_back() {
        let text = "Your vitals look broadly normal. Keep exercising.";
        let summary = parse_summary(text);
        assert_eq!(summary.summary, text);
        assert_eq!(summary.risk_level, RiskLevel::Medium);
        assert_eq!(
            summary.recommendations,
            vec![
                "Consult with a healthcare professional",
                "Monitor your vitals regularly",
                "Maintain a healthy lifestyle",
            ]
        );
    }

    #[test]
    fn test_parse_summary_with_invalid_json_falls_back() {
        let text = "{not json at all}";
        let summary = parse_summary(text);
        assert_eq!(summary.summary, text);
        assert_eq!(summary.risk_level, RiskLevel::Medium);
        assert_eq!(summary.recommendations.len(), 3);
    }

    #[test]
    fn test_parse_summary_unknown_label_degrades_to_medium() {
        let text = r#"{"summary": "ok", "riskLevel": "Severe", "recommendations": []}"#;
        assert_eq!(parse_summary(text).risk_level, RiskLevel::Medium);
    }
}
