use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at the queried location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    /// Today's rainfall so far
    pub rainfall_mm: f64,
    pub condition: WeatherCondition,
    pub description: String,
}

/// One day of the forecast. Index 0 is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub label: String,
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    pub condition: WeatherCondition,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub state: String,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.state.is_empty(), self.country.is_empty()) {
            (true, true) => write!(f, "{}", self.name),
            (true, false) => write!(f, "{}, {}", self.name, self.country),
            (false, true) => write!(f, "{}, {}", self.name, self.state),
            (false, false) => write!(f, "{}, {} {}", self.name, self.state, self.country),
        }
    }
}

/// Result of one successful weather fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub location: Location,
    pub current: WeatherReading,
    pub forecast: Vec<ForecastDay>,
}

/// Relative label for a forecast index ("Today", "Tomorrow", "Day 3", ...).
pub fn day_label(index: usize) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("Day {}", n + 1),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    LightRain,
    Thunderstorm,
    Snow,
    Fog,
    #[default]
    Other,
}

impl WeatherCondition {
    pub fn from_owm_id(id: u32) -> Self {
        match id {
            200..=232 => WeatherCondition::Thunderstorm,
            300..=321 | 500 | 520 => WeatherCondition::LightRain,
            501..=531 => WeatherCondition::Rain,
            600..=622 => WeatherCondition::Snow,
            701..=781 => WeatherCondition::Fog,
            800 => WeatherCondition::Sunny,
            801 | 802 => WeatherCondition::PartlyCloudy,
            803 | 804 => WeatherCondition::Cloudy,
            _ => WeatherCondition::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::PartlyCloudy => "partly-cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rain => "rain",
            WeatherCondition::LightRain => "light-rain",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Other => "other",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Cloudy => "☁",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::LightRain => "🌦",
            WeatherCondition::Thunderstorm => "⛈",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Fog => "🌫",
            WeatherCondition::Other => "?",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_condition_from_owm_id() {
        assert_eq!(
            WeatherCondition::from_owm_id(211),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_owm_id(500), WeatherCondition::LightRain);
        assert_eq!(WeatherCondition::from_owm_id(502), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_owm_id(800), WeatherCondition::Sunny);
        assert_eq!(
            WeatherCondition::from_owm_id(802),
            WeatherCondition::PartlyCloudy
        );
        assert_eq!(WeatherCondition::from_owm_id(804), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_owm_id(741), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_owm_id(999), WeatherCondition::Other);
    }

    #[test]
    fn weather_condition_tags_are_kebab_case() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly-cloudy\"");
        assert_eq!(WeatherCondition::LightRain.as_str(), "light-rain");
    }

    #[test]
    fn day_labels() {
        assert_eq!(day_label(0), "Today");
        assert_eq!(day_label(1), "Tomorrow");
        assert_eq!(day_label(4), "Day 5");
    }

    #[test]
    fn location_display() {
        let mut location = Location {
            name: "Pune".into(),
            country: "IN".into(),
            state: String::new(),
        };
        assert_eq!(location.to_string(), "Pune, IN");
        location.state = "Maharashtra".into();
        assert_eq!(location.to_string(), "Pune, Maharashtra IN");
    }
}
