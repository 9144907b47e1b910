use health::dto::HealthSnapshot;
use health::models::RiskAssessment;
use health::services::risk_scoring;

/// Run the deterministic rule-table scorer. Total: every snapshot yields an
/// assessment, so this path has no failure mode.
pub fn compute_risk_score(snapshot: &HealthSnapshot) -> RiskAssessment {
    risk_scoring::score_snapshot(snapshot)
}
