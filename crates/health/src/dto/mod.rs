mod metrics;
mod snapshot;

pub use metrics::WearableMetrics;
pub use snapshot::HealthSnapshot;
