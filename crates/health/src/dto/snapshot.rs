use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{EnvironmentReading, HereditaryRecord, VitalsReading};

/// Everything a risk evaluation runs over: the user's current vitals and
/// environment readings plus the full family history. The caller resolves
/// "current" (newest per user) before building a snapshot; this type carries
/// no query semantics of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HealthSnapshot {
    pub vitals: Option<VitalsReading>,
    pub environment: Option<EnvironmentReading>,
    #[serde(default)]
    pub parents: Vec<HereditaryRecord>,
}
