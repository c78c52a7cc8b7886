use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, RangePosition, Severity};

/// Relative humidity against the crop's optimal band. Same three-way split
/// as [`super::temperature::TemperatureRule`].
pub struct HumidityRule;

impl Rule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "Humidity Tolerance"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory> {
        let humidity = ctx.current.humidity_percent;
        let range = ctx.crop.optimal_humidity;

        let (severity, message, action) = match range.position(humidity) {
            RangePosition::Below => (
                Severity::Warning,
                format!(
                    "Humidity ({}%) is below optimal range ({}% - {}%). \
                     Increase irrigation frequency.",
                    humidity, range.min, range.max
                ),
                "Monitor soil moisture closely",
            ),
            RangePosition::Above => (
                Severity::Warning,
                format!(
                    "Humidity ({}%) is above optimal range ({}% - {}%). \
                     Ensure good ventilation and watch for fungal diseases.",
                    humidity, range.min, range.max
                ),
                "Improve air circulation",
            ),
            RangePosition::Within => (
                Severity::Success,
                format!("Humidity ({}%) is optimal for {}.", humidity, ctx.crop.name),
                "Continue current practices",
            ),
        };

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::Humidity,
            severity,
            message,
            action,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::calculations::test_support::{forecast_with_rain, reading};
    use crate::registry;

    fn run(crop: &str, humidity: f64) -> Advisory {
        let current = reading(22.0, humidity);
        let forecast = forecast_with_rain(&[]);
        let ctx = AdvisoryContext {
            month: 1,
            current: &current,
            forecast: &forecast,
            crop: registry::lookup(crop).unwrap(),
        };
        HumidityRule.evaluate(&ctx).unwrap()
    }

    #[test]
    fn dry_air_asks_for_more_irrigation() {
        let advisory = run("wheat", 30.0);
        assert_eq!(advisory.severity, Severity::Warning);
        assert_eq!(advisory.category, AdvisoryCategory::Humidity);
        assert_eq!(
            advisory.message,
            "Humidity (30%) is below optimal range (40% - 70%). Increase irrigation frequency."
        );
    }

    #[test]
    fn humid_air_asks_for_ventilation() {
        let advisory = run("tomato", 85.0);
        assert_eq!(advisory.severity, Severity::Warning);
        assert_eq!(advisory.action, "Improve air circulation");
        assert!(advisory.message.contains("ventilation"));
    }

    #[test]
    fn bounds_count_as_optimal() {
        assert_eq!(run("rice", 60.0).severity, Severity::Success);
        assert_eq!(run("rice", 80.0).severity, Severity::Success);
        assert_eq!(run("rice", 80.5).severity, Severity::Warning);
        assert_eq!(run("rice", 65.0).message, "Humidity (65%) is optimal for Rice.");
    }
}
