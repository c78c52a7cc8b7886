use super::{
    disease_risk::DiseaseRiskRule, harvest::HarvestRule, humidity::HumidityRule,
    irrigation::IrrigationRule, planting::PlantingRule, temperature::TemperatureRule,
    AdvisoryContext, Rule,
};
use crate::models::{Advisory, CropProfile, ForecastDay, WeatherReading};

/// Runs every rule in a fixed order. Output order is emission order and
/// callers display it as-is.
pub struct AdvisoryEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(TemperatureRule),
            Box::new(HumidityRule),
            Box::new(IrrigationRule),
            Box::new(PlantingRule),
            Box::new(HarvestRule),
            Box::new(DiseaseRiskRule),
        ];

        Self { rules }
    }

    /// Evaluate all rules. Without a crop there is nothing to advise on and
    /// the result is empty.
    pub fn evaluate(
        &self,
        month: u32,
        current: &WeatherReading,
        forecast: &[ForecastDay],
        crop: Option<&CropProfile>,
    ) -> Vec<Advisory> {
        let Some(crop) = crop else {
            return Vec::new();
        };

        let ctx = AdvisoryContext {
            month,
            current,
            forecast,
            crop,
        };

        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(&ctx))
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}
