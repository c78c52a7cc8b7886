//! Built-in crop table. Read-only for the life of the process.

use crate::error::{CropAdvisorError, Result};
use crate::models::{CropProfile, OptimalRange, WaterRequirement};

static CROPS: [(&str, CropProfile); 4] = [
    (
        "rice",
        CropProfile {
            name: "Rice",
            optimal_temperature: OptimalRange::new(20.0, 35.0),
            optimal_humidity: OptimalRange::new(60.0, 80.0),
            water_requirement: WaterRequirement::High,
            growth_stages: &["seedling", "tillering", "flowering", "maturity"],
            planting_months: &[5, 6, 7],
            harvest_months: &[10, 11, 12],
        },
    ),
    (
        "wheat",
        CropProfile {
            name: "Wheat",
            optimal_temperature: OptimalRange::new(15.0, 25.0),
            optimal_humidity: OptimalRange::new(40.0, 70.0),
            water_requirement: WaterRequirement::Medium,
            growth_stages: &["germination", "tillering", "heading", "maturity"],
            planting_months: &[11, 12, 1],
            harvest_months: &[4, 5],
        },
    ),
    (
        "corn",
        CropProfile {
            name: "Corn/Maize",
            optimal_temperature: OptimalRange::new(18.0, 30.0),
            optimal_humidity: OptimalRange::new(50.0, 75.0),
            water_requirement: WaterRequirement::High,
            growth_stages: &["emergence", "vegetative", "reproductive", "maturity"],
            planting_months: &[3, 4, 5],
            harvest_months: &[8, 9, 10],
        },
    ),
    (
        "tomato",
        CropProfile {
            name: "Tomato",
            optimal_temperature: OptimalRange::new(18.0, 26.0),
            optimal_humidity: OptimalRange::new(60.0, 80.0),
            water_requirement: WaterRequirement::Medium,
            growth_stages: &["seedling", "flowering", "fruiting", "harvest"],
            planting_months: &[2, 3, 4, 9, 10],
            harvest_months: &[5, 6, 7, 12, 1],
        },
    ),
];

/// Resolve a crop by registry key or display name, ignoring case.
pub fn lookup(key: &str) -> Result<&'static CropProfile> {
    let needle = key.trim().to_lowercase();
    CROPS
        .iter()
        .find(|(k, profile)| *k == needle || profile.name.to_lowercase() == needle)
        .map(|(_, profile)| profile)
        .ok_or_else(|| CropAdvisorError::NotFound(format!("crop '{}'", key.trim())))
}

/// All crops in registry order.
pub fn list_all() -> &'static [(&'static str, CropProfile)] {
    &CROPS
}

pub fn keys() -> Vec<&'static str> {
    CROPS.iter().map(|(k, _)| *k).collect()
}

/// Check every profile's invariants.
pub fn validate() -> Result<()> {
    for (key, profile) in CROPS.iter() {
        if let Some(problem) = profile.validate() {
            return Err(CropAdvisorError::InvalidData(format!(
                "crop registry entry '{}': {}",
                key, problem
            )));
        }
    }
    Ok(())
}
