use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw wearable metrics accepted by the legacy summary endpoint. Kept for
/// backward compatibility with older clients; new integrations should send a
/// [`super::HealthSnapshot`] instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WearableMetrics {
    pub heart_rate: Option<f64>,
    pub spo2: Option<f64>,
    pub temperature: Option<f64>,
    pub stress: Option<f64>,
    pub steps: Option<f64>,
}
