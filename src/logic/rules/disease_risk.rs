use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, Severity};

/// Humidity above this (percent) favors fungal growth.
pub const HUMIDITY_THRESHOLD: f64 = 80.0;

/// Temperature above this (°C) favors fungal growth.
pub const TEMPERATURE_THRESHOLD: f64 = 20.0;

/// Fungal disease risk from warm, humid conditions.
///
/// Applies to every crop alike; the crop's own tolerance bands are not
/// consulted. Both thresholds are strict.
pub struct DiseaseRiskRule;

impl Rule for DiseaseRiskRule {
    fn id(&self) -> &'static str {
        "disease_risk"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Risk"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory> {
        let humidity = ctx.current.humidity_percent;
        let temp = ctx.current.temperature_c;

        if humidity <= HUMIDITY_THRESHOLD || temp <= TEMPERATURE_THRESHOLD {
            return None;
        }

        tracing::debug!(humidity, temp, "disease risk conditions met");

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::DiseaseRisk,
            Severity::Warning,
            format!(
                "High humidity ({}%) and temperature ({}°C) favor fungal diseases.",
                humidity, temp
            ),
            "Apply preventive fungicide treatments",
        ))
    }
}
