use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, Severity};

/// Flags the crop's harvest window. Independent of [`super::planting::PlantingRule`];
/// crops whose windows overlap get both.
pub struct HarvestRule;

impl Rule for HarvestRule {
    fn id(&self) -> &'static str {
        "harvest_season"
    }

    fn name(&self) -> &'static str {
        "Harvest Season"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<Advisory> {
        if !ctx.crop.is_harvest_month(ctx.month) {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::Harvest,
            Severity::Info,
            format!(
                "This is harvest season for {}. Monitor crop maturity.",
                ctx.crop.name
            ),
            "Prepare for harvesting activities",
        ))
    }
}
