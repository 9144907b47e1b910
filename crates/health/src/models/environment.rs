use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Ambient conditions reported by a user's environmental sensors. Same
/// lifecycle as [`super::VitalsReading`]: immutable, newest-by-timestamp wins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnvironmentReading {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Air quality index.
    pub air_quality: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    /// CO2 concentration, ppm.
    pub co2: Option<f64>,
    /// Relative humidity, percent.
    pub humidity: Option<f64>,
    /// Ambient temperature, degrees Fahrenheit.
    pub temperature: Option<f64>,
    pub gas_level: Option<f64>,
    pub noise_level: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}
