pub mod disease_risk;
pub mod engine;
pub mod harvest;
pub mod humidity;
pub mod irrigation;
pub mod planting;
pub mod temperature;

pub use engine::AdvisoryEngine;

use crate::models::{Advisory, CropProfile, ForecastDay, WeatherReading};

/// Everything a rule may look at for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryContext<'a> {
    /// Calendar month, 1-12
    pub month: u32,
    pub current: &'a WeatherReading,
    pub forecast: &'a [ForecastDay],
    pub crop: &'a CropProfile,
}

/// Trait for agronomic rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an advisory if it applies
    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory>;
}
