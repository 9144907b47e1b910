use std::fmt::Write;

use health::dto::{HealthSnapshot, WearableMetrics};

/// Builds the natural-language blocks submitted to the model. Absent values
/// render as "N/A" so the model sees every labelled field regardless of which
/// sensors the user actually has.
pub struct ContextBuilder;

impl ContextBuilder {
    pub fn system_prompt() -> &'static str {
        "You are a preventive health AI assistant for Kavach. Analyze user health data and \
         provide personalized recommendations. Focus on disease prevention, risk assessment, \
         and actionable guidance. Be concise but thorough."
    }

    /// The labelled context block for the primary structured path: one line
    /// per vitals field, one per environment field, one per family record.
    pub fn health_context(snapshot: &HealthSnapshot) -> String {
        let vitals = snapshot.vitals.as_ref();
        let environment = snapshot.environment.as_ref();

        let history = if snapshot.parents.is_empty() {
            "- No family health history available".to_string()
        } else {
            let mut lines = String::new();
            for record in &snapshot.parents {
                let _ = writeln!(
                    lines,
                    "- {}: {}",
                    record.relation_type.as_deref().unwrap_or("Unknown"),
                    record.name.as_deref().unwrap_or("Unknown")
                );
            }
            lines.trim_end().to_string()
        };

        format!(
            "User Health Data:\n\
             - Heart Rate: {} bpm\n\
             - SpO2: {}%\n\
             - Blood Pressure: {}\n\
             - Temperature: {}\u{b0}F\n\
             - Respiration Rate: {} breaths/min\n\n\
             Environmental Data:\n\
             - Temperature: {}\u{b0}F\n\
             - Humidity: {}%\n\
             - Air Quality: {}\n\
             - PM2.5: {}\n\
             - PM10: {}\n\
             - CO2: {} ppm\n\n\
             Family Health History:\n\
             {}",
            metric(vitals.and_then(|v| v.heart_rate)),
            metric(vitals.and_then(|v| v.spo2)),
            vitals.and_then(|v| v.bp.clone()).unwrap_or_else(na),
            metric(vitals.and_then(|v| v.temperature)),
            metric(vitals.and_then(|v| v.respiration_rate)),
            metric(environment.and_then(|e| e.temperature)),
            metric(environment.and_then(|e| e.humidity)),
            metric(environment.and_then(|e| e.air_quality)),
            metric(environment.and_then(|e| e.pm25)),
            metric(environment.and_then(|e| e.pm10)),
            metric(environment.and_then(|e| e.co2)),
            history,
        )
    }

    /// The full user message for the primary path: the context block plus the
    /// instruction to produce a risk level, factors, and recommendations.
    pub fn insights_prompt(snapshot: &HealthSnapshot) -> String {
        format!(
            "{}\n\nBased on this health data, provide:\n\
             1. Current risk level (Low/Medium/High) with brief explanation\n\
             2. 3-4 specific risk factors or positive indicators\n\
             3. 3-4 actionable recommendations with priority levels",
            Self::health_context(snapshot)
        )
    }

    /// The legacy prompt: five raw wearable metrics, asking for a prose
    /// summary encoded as JSON.
    pub fn summary_prompt(metrics: &WearableMetrics) -> String {
        format!(
            "You are a health AI assistant. Analyze the following health metrics and provide \
             personalized insights:\n\n\
             Heart Rate: {} bpm\n\
             SpO2: {}%\n\
             Temperature: {}\u{b0}F\n\
             Stress Level: {}\n\
             Steps: {}\n\n\
             Provide:\n\
             1. A brief summary (2-3 sentences) of the overall health status\n\
             2. Risk level (Low, Medium, or High)\n\
             3. 3-4 specific actionable recommendations\n\n\
             Format your response as JSON with fields: summary, riskLevel, recommendations \
             (array of strings).",
            metric(metrics.heart_rate),
            metric(metrics.spo2),
            metric(metrics.temperature),
            metric(metrics.stress),
            metric(metrics.steps),
        )
    }
}

fn metric(value: Option<f64>) -> String {
    value.map_or_else(na, |v| v.to_string())
}

fn na() -> String {
    "N/A".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use health::models::{HereditaryRecord, VitalsReading};
    use uuid::Uuid;

    fn snapshot_with_vitals() -> HealthSnapshot {
        HealthSnapshot {
            vitals: Some(VitalsReading {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                heart_rate: Some(72.0),
                spo2: Some(98.0),
                bp: Some("120/80".to_string()),
                temperature: None,
                respiration_rate: None,
                created_at: Some(Utc::now()),
            }),
            environment: None,
            parents: Vec::new(),
        }
    }

    #[test]
    fn test_present_values_are_labelled() {
        let context = ContextBuilder::health_context(&snapshot_with_vitals());
        assert!(context.contains("- Heart Rate: 72 bpm"));
        assert!(context.contains("- SpO2: 98%"));
        assert!(context.contains("- Blood Pressure: 120/80"));
    }

    #[test]
    fn test_absent_values_render_na() {
        let context = ContextBuilder::health_context(&HealthSnapshot::default());
        assert!(context.contains("- Heart Rate: N/A bpm"));
        assert!(context.contains("- Air Quality: N/A"));
        assert!(context.contains("- CO2: N/A ppm"));
    }

    #[test]
    fn test_parents_render_relation_and_name() {
        let mut snapshot = HealthSnapshot::default();
        snapshot.parents.push(HereditaryRecord {
            id: Uuid::new_v4(),
            user_id: None,
            name: Some("Diabetes Type 2".to_string()),
            relation_type: Some("Mother".to_string()),
            contact: None,
            created_at: Utc::now(),
        });
        let context = ContextBuilder::health_context(&snapshot);
        assert!(context.contains("- Mother: Diabetes Type 2"));
        assert!(!context.contains("No family health history"));
    }

    #[test]
    fn test_empty_history_has_placeholder_line() {
        let context = ContextBuilder::health_context(&HealthSnapshot::default());
        assert!(context.contains("- No family health history available"));
    }

    #[test]
    fn test_insights_prompt_appends_instructions() {
        let prompt = ContextBuilder::insights_prompt(&HealthSnapshot::default());
        assert!(prompt.starts_with("User Health Data:"));
        assert!(prompt.contains("Current risk level (Low/Medium/High)"));
    }

    #[test]
    fn test_summary_prompt_includes_metrics_and_format() {
        let metrics = WearableMetrics {
            heart_rate: Some(88.0),
            steps: Some(4200.0),
            ..WearableMetrics::default()
        };
        let prompt = ContextBuilder::summary_prompt(&metrics);
        assert!(prompt.contains("Heart Rate: 88 bpm"));
        assert!(prompt.contains("Steps: 4200"));
        assert!(prompt.contains("Stress Level: N/A"));
        assert!(prompt.contains("summary, riskLevel, recommendations"));
    }
}
