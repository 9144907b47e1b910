use crate::Result;
use crate::models::HealthInsights;

/// Capability interface over the external language model. The aggregation
/// logic only ever talks to this trait, so tests substitute canned
/// implementations and never touch the network.
#[async_trait::async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Submit a context block and get back an insights object conforming to
    /// the structured output schema, or a typed failure.
    async fn generate_insights(&self, context: &str) -> Result<HealthInsights>;

    /// Submit a prompt and get back the model's raw text reply.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}
