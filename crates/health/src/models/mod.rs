mod assessment;
mod environment;
mod hereditary;
mod vitals;

pub use assessment::{
    FactorStatus, Priority, Recommendation, RiskAssessment, RiskFactor, RiskLevel,
};
pub use environment::EnvironmentReading;
pub use hereditary::HereditaryRecord;
pub use vitals::VitalsReading;
