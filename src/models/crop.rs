use serde::Serialize;

/// Where a reading sits relative to an [`OptimalRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    Below,
    Within,
    Above,
}

/// Closed interval `[min, max]`. Both bounds count as within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl OptimalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn position(&self, value: f64) -> RangePosition {
        if value < self.min {
            RangePosition::Below
        } else if value > self.max {
            RangePosition::Above
        } else {
            RangePosition::Within
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.min < self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl WaterRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterRequirement::Low => "low",
            WaterRequirement::Medium => "medium",
            WaterRequirement::High => "high",
        }
    }
}

impl std::fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static agronomic tolerances for one crop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    /// °C
    pub optimal_temperature: OptimalRange,
    /// Relative humidity, percent
    pub optimal_humidity: OptimalRange,
    pub water_requirement: WaterRequirement,
    /// Informational only; no rule reads it.
    pub growth_stages: &'static [&'static str],
    pub planting_months: &'static [u32],
    pub harvest_months: &'static [u32],
}

impl CropProfile {
    pub fn is_planting_month(&self, month: u32) -> bool {
        self.planting_months.contains(&month)
    }

    pub fn is_harvest_month(&self, month: u32) -> bool {
        self.harvest_months.contains(&month)
    }

    /// Returns a description of the first broken invariant, if any.
    pub fn validate(&self) -> Option<String> {
        if !self.optimal_temperature.is_ordered() {
            return Some(format!(
                "{}: temperature range {} - {} is not ordered",
                self.name, self.optimal_temperature.min, self.optimal_temperature.max
            ));
        }
        if !self.optimal_humidity.is_ordered() {
            return Some(format!(
                "{}: humidity range {} - {} is not ordered",
                self.name, self.optimal_humidity.min, self.optimal_humidity.max
            ));
        }
        self.planting_months
            .iter()
            .chain(self.harvest_months.iter())
            .find(|m| !(1..=12).contains(*m))
            .map(|m| format!("{}: month {} is outside 1-12", self.name, m))
    }
}
