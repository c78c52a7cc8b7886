use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, Severity};

/// Flags the crop's planting window.
pub struct PlantingRule;

impl Rule for PlantingRule {
    fn id(&self) -> &'static str {
        "planting_season"
    }

    fn name(&self) -> &'static str {
        "Planting Season"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory> {
        if !ctx.crop.is_planting_month(ctx.month) {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::Planting,
            Severity::Success,
            format!("This is an optimal month for planting {}.", ctx.crop.name),
            "Consider starting new plantings",
        ))
    }
}
