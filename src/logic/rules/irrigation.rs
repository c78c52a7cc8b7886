use super::{AdvisoryContext, Rule};
use crate::logic::calculations::{format_rainfall, upcoming_rainfall};
use crate::models::{Advisory, AdvisoryCategory, Severity, WaterRequirement};

/// Upcoming rainfall above this (mm over three days) is treated as heavy.
pub const HEAVY_RAIN_MM: f64 = 30.0;

/// Below this, water-intensive crops need supplemental irrigation.
pub const LOW_RAIN_MM: f64 = 5.0;

/// Irrigation advice from the rainfall expected over the next three days.
///
/// - Info when more than 30mm is coming (drain, cut back irrigation)
/// - Warning when under 5mm is coming and the crop's water need is high
/// - Info otherwise
pub struct IrrigationRule;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Upcoming Rainfall"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory> {
        let upcoming_rain = upcoming_rainfall(ctx.forecast);
        let rain_text = format_rainfall(upcoming_rain);
        let crop = ctx.crop;

        tracing::debug!(
            upcoming_rain,
            forecast_days = ctx.forecast.len(),
            "irrigation rule"
        );

        let advisory = if upcoming_rain > HEAVY_RAIN_MM {
            Advisory::new(
                self.id(),
                AdvisoryCategory::Irrigation,
                Severity::Info,
                format!(
                    "Heavy rainfall expected ({}mm). Reduce irrigation and ensure drainage.",
                    rain_text
                ),
                "Prepare for excess water management",
            )
        } else if upcoming_rain < LOW_RAIN_MM && crop.water_requirement == WaterRequirement::High
        {
            Advisory::new(
                self.id(),
                AdvisoryCategory::Irrigation,
                Severity::Warning,
                format!(
                    "Low rainfall expected ({}mm). Increase irrigation for water-intensive {}.",
                    rain_text, crop.name
                ),
                "Plan additional watering schedule",
            )
        } else {
            Advisory::new(
                self.id(),
                AdvisoryCategory::Irrigation,
                Severity::Info,
                format!(
                    "Expected rainfall ({}mm) is adequate for {}.",
                    rain_text, crop.name
                ),
                "Monitor soil moisture regularly",
            )
        };

        Some(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::calculations::test_support::{forecast_with_rain, reading};
    use crate::registry;

    fn run(crop: &str, rainfall: &[f64]) -> Advisory {
        let current = reading(22.0, 65.0);
        let forecast = forecast_with_rain(rainfall);
        let ctx = AdvisoryContext {
            month: 6,
            current: &current,
            forecast: &forecast,
            crop: registry::lookup(crop).unwrap(),
        };
        IrrigationRule.evaluate(&ctx).unwrap()
    }

    #[test]
    fn heavy_rain_reduces_irrigation() {
        let advisory = run("tomato", &[0.0, 20.0, 15.0, 5.0, 0.0]);
        assert_eq!(advisory.severity, Severity::Info);
        assert_eq!(
            advisory.message,
            "Heavy rainfall expected (40.0mm). Reduce irrigation and ensure drainage."
        );
    }

    #[test]
    fn exactly_thirty_is_not_heavy() {
        let advisory = run("wheat", &[0.0, 10.0, 10.0, 10.0]);
        assert!(advisory.message.starts_with("Expected rainfall (30.0mm)"));
    }

    #[test]
    fn dry_spell_warns_for_thirsty_crops_only() {
        let rice = run("rice", &[9.0, 1.0, 0.5, 0.5, 9.0]);
        assert_eq!(rice.severity, Severity::Warning);
        assert_eq!(
            rice.message,
            "Low rainfall expected (2.0mm). Increase irrigation for water-intensive Rice."
        );

        let wheat = run("wheat", &[9.0, 1.0, 0.5, 0.5, 9.0]);
        assert_eq!(wheat.severity, Severity::Info);
        assert_eq!(wheat.message, "Expected rainfall (2.0mm) is adequate for Wheat.");
    }

    #[test]
    fn exactly_five_is_not_low() {
        let advisory = run("corn", &[0.0, 5.0]);
        assert_eq!(advisory.severity, Severity::Info);
    }

    #[test]
    fn one_day_forecast_sums_to_zero() {
        let corn = run("corn", &[50.0]);
        assert_eq!(corn.severity, Severity::Warning);
        assert!(corn.message.contains("(0.0mm)"));

        let tomato = run("tomato", &[50.0]);
        assert_eq!(tomato.severity, Severity::Info);
        assert_eq!(tomato.action, "Monitor soil moisture regularly");
    }

    #[test]
    fn figure_is_rounded_to_one_decimal() {
        let advisory = run("wheat", &[0.0, 1.04, 2.0, 3.0]);
        assert!(advisory.message.contains("(6.0mm)"));
        let advisory = run("wheat", &[0.0, 1.26, 2.0, 3.0]);
        assert!(advisory.message.contains("(6.3mm)"));
    }

    #[test]
    fn quarter_millimetre_sums_round_half_up() {
        let advisory = run("wheat", &[0.0, 0.25]);
        assert_eq!(advisory.message, "Expected rainfall (0.3mm) is adequate for Wheat.");

        let advisory = run("wheat", &[0.0, 1.25]);
        assert!(advisory.message.contains("(1.3mm)"));

        let advisory = run("wheat", &[0.0, 10.0, 10.0, 10.25]);
        assert_eq!(
            advisory.message,
            "Heavy rainfall expected (30.3mm). Reduce irrigation and ensure drainage."
        );
    }
}
