pub mod dto;
pub mod models;
pub mod services;

pub use dto::{HealthSnapshot, WearableMetrics};
pub use models::{
    EnvironmentReading, FactorStatus, HereditaryRecord, Priority, Recommendation, RiskAssessment,
    RiskFactor, RiskLevel, VitalsReading,
};
