pub mod aggregator;
pub mod context;
pub mod error;
pub mod gateway;
pub mod models;
pub mod traits;

pub use aggregator::InsightAggregator;
pub use context::ContextBuilder;
pub use error::{InsightError, Result};
pub use gateway::{GatewayClient, GatewayConfig};
pub use models::{AiSummary, AiSummaryResponse, HealthInsights, HealthInsightsResponse};
pub use traits::InsightGenerator;
