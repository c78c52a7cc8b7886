use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdvisoryCategory {
    Temperature,
    Humidity,
    Irrigation,
    Planting,
    Harvest,
    #[serde(rename = "Disease Risk")]
    DiseaseRisk,
}

impl AdvisoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryCategory::Temperature => "Temperature",
            AdvisoryCategory::Humidity => "Humidity",
            AdvisoryCategory::Irrigation => "Irrigation",
            AdvisoryCategory::Planting => "Planting",
            AdvisoryCategory::Harvest => "Harvest",
            AdvisoryCategory::DiseaseRisk => "Disease Risk",
        }
    }
}

impl std::fmt::Display for AdvisoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One piece of advice produced by a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub rule_id: &'static str,
    pub severity: Severity,
    pub category: AdvisoryCategory,
    pub message: String,
    pub action: String,
}

impl Advisory {
    pub fn new(
        rule_id: &'static str,
        category: AdvisoryCategory,
        severity: Severity,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            severity,
            category,
            message: message.into(),
            action: action.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
