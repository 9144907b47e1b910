use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single vital-signs reading. Readings are immutable once recorded; the
/// newest reading by `created_at` is the user's "current" state, and that
/// selection happens in the persistence layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VitalsReading {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Beats per minute.
    pub heart_rate: Option<f64>,
    /// Oxygen saturation, percent.
    pub spo2: Option<f64>,
    /// Free-text blood pressure, e.g. "120/80".
    pub bp: Option<String>,
    /// Body temperature, degrees Fahrenheit.
    pub temperature: Option<f64>,
    /// Breaths per minute.
    pub respiration_rate: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}
