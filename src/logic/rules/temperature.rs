use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, RangePosition, Severity};

/// Compares current air temperature against the crop's optimal band.
///
/// Always emits exactly one advisory:
/// - Warning below the band (cold stress)
/// - Warning above the band (heat stress)
/// - Success inside the band, bounds included
pub struct TemperatureRule;

impl Rule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature Tolerance"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory> {
        let temp = ctx.current.temperature_c;
        let range = ctx.crop.optimal_temperature;
        let position = range.position(temp);

        tracing::debug!(temp, min = range.min, max = range.max, ?position, "temperature rule");

        let advisory = match position {
            RangePosition::Below => Advisory::new(
                self.id(),
                AdvisoryCategory::Temperature,
                Severity::Warning,
                format!(
                    "Temperature ({}°C) is below optimal range ({}°C - {}°C). \
                     Consider using row covers or greenhouses.",
                    temp, range.min, range.max
                ),
                "Protect crops from cold stress",
            ),
            RangePosition::Above => Advisory::new(
                self.id(),
                AdvisoryCategory::Temperature,
                Severity::Warning,
                format!(
                    "Temperature ({}°C) is above optimal range ({}°C - {}°C). \
                     Increase irrigation and provide shade.",
                    temp, range.min, range.max
                ),
                "Implement cooling measures",
            ),
            RangePosition::Within => Advisory::new(
                self.id(),
                AdvisoryCategory::Temperature,
                Severity::Success,
                format!("Temperature ({}°C) is optimal for {}.", temp, ctx.crop.name),
                "Continue current practices",
            ),
        };

        Some(advisory)
    }
}
