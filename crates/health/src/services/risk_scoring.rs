use crate::dto::HealthSnapshot;
use crate::models::{
    EnvironmentReading, FactorStatus, HereditaryRecord, RiskAssessment, RiskFactor, RiskLevel,
    VitalsReading,
};

/// Computes the deterministic risk verdict from the latest readings and the
/// full hereditary-record set.
///
/// Additive point system; each rule is evaluated independently and absent
/// fields contribute nothing. The function is total: there is no input for
/// which it fails, and identical input always yields an identical verdict.
pub fn score(
    vitals: Option<&VitalsReading>,
    environment: Option<&EnvironmentReading>,
    parents: &[HereditaryRecord],
) -> RiskAssessment {
    let mut score = 0u32;
    let mut factors = Vec::new();

    if let Some(vitals) = vitals {
        if vitals.heart_rate.is_some_and(|hr| hr > 100.0 || hr < 60.0) {
            score += 2;
            factors.push(warning("Abnormal heart rate"));
        }
        if vitals.spo2.is_some_and(|spo2| spo2 < 95.0) {
            score += 3;
            factors.push(warning("Low oxygen saturation"));
        }
        if vitals.temperature.is_some_and(|t| t > 99.5) {
            score += 2;
            factors.push(warning("Elevated temperature"));
        }
    }

    if let Some(environment) = environment {
        if environment.air_quality.is_some_and(|aqi| aqi > 150.0) {
            score += 2;
            factors.push(warning("Poor air quality"));
        }
        if environment.pm25.is_some_and(|pm25| pm25 > 35.0) {
            score += 1;
            factors.push(warning("High PM2.5 levels"));
        }
    }

    if has_condition(parents, &["diabetes"]) {
        score += 2;
        factors.push(warning("Family history of diabetes"));
    }
    if has_condition(parents, &["cardiac", "heart"]) {
        score += 2;
        factors.push(warning("Family history of cardiac issues"));
    }

    RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
        factors,
        recommendations: Vec::new(),
    }
}

/// Convenience wrapper over [`score`] for the wire envelope.
pub fn score_snapshot(snapshot: &HealthSnapshot) -> RiskAssessment {
    score(
        snapshot.vitals.as_ref(),
        snapshot.environment.as_ref(),
        &snapshot.parents,
    )
}

fn warning(factor: &str) -> RiskFactor {
    RiskFactor {
        factor: factor.to_string(),
        status: FactorStatus::Warning,
    }
}

fn has_condition(parents: &[HereditaryRecord], keywords: &[&str]) -> bool {
    parents.iter().any(|record| {
        record.name.as_deref().is_some_and(|name| {
            let name = name.to_lowercase();
            keywords.iter().any(|keyword| name.contains(keyword))
        })
    })
}
