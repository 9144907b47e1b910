use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A family member's health-relevant record. The `name` is free text and may
/// embed a condition keyword ("Diabetes Type 2"), which the risk scorer
/// searches case-insensitively. Records are an unordered set: there is no
/// recency semantics, all of them are considered simultaneously.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HereditaryRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: Option<String>,
    /// Relationship to the user, e.g. "Father".
    pub relation_type: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
