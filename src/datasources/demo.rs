use crate::error::{CropAdvisorError, Result};
use crate::models::{
    day_label, ForecastDay, Location, WeatherCondition, WeatherReading, WeatherSnapshot,
};
use chrono::{Duration, Local, NaiveDate, Utc};
use std::time::Duration as StdDuration;

/// Fixed sample weather for trying the tool without an API key.
///
/// Any non-blank location resolves; the reading and 5-day forecast are
/// always the same, dated from `start_date`.
pub struct DemoWeatherSource {
    latency: StdDuration,
    start_date: Option<NaiveDate>,
}

/// (temp °C, humidity %, rainfall mm, condition, description)
const DEMO_FORECAST: [(f64, f64, f64, WeatherCondition, &str); 5] = [
    (24.0, 65.0, 2.5, WeatherCondition::PartlyCloudy, "partly cloudy"),
    (26.0, 70.0, 0.0, WeatherCondition::Sunny, "clear sky"),
    (22.0, 80.0, 15.0, WeatherCondition::Rain, "moderate rain"),
    (20.0, 75.0, 8.0, WeatherCondition::LightRain, "light rain"),
    (25.0, 60.0, 0.0, WeatherCondition::Sunny, "clear sky"),
];

impl DemoWeatherSource {
    pub fn new(latency: StdDuration) -> Self {
        Self {
            latency,
            start_date: None,
        }
    }

    /// Pin the forecast's first date instead of using today.
    #[cfg(test)]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub async fn fetch_current_and_forecast(&self, location_query: &str) -> Result<WeatherSnapshot> {
        let name = location_query.trim();
        if name.is_empty() {
            return Err(CropAdvisorError::LookupFailure(
                "no location given".to_string(),
            ));
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tracing::info!(location = name, "serving demo weather data");

        let start = self
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());

        let forecast = DEMO_FORECAST
            .iter()
            .enumerate()
            .map(
                |(i, (temperature_c, humidity_percent, rainfall_mm, condition, description))| {
                    ForecastDay {
                        label: day_label(i),
                        date: start + Duration::days(i as i64),
                        temperature_c: *temperature_c,
                        humidity_percent: *humidity_percent,
                        rainfall_mm: *rainfall_mm,
                        condition: *condition,
                        description: description.to_string(),
                    }
                },
            )
            .collect();

        Ok(WeatherSnapshot {
            fetched_at: Utc::now(),
            location: Location {
                name: name.to_string(),
                country: "Demo".to_string(),
                state: String::new(),
            },
            current: WeatherReading {
                temperature_c: 24.0,
                humidity_percent: 65.0,
                wind_speed_kmh: 12.0,
                rainfall_mm: 2.5,
                condition: WeatherCondition::PartlyCloudy,
                description: "partly cloudy".to_string(),
            },
            forecast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::calculations::upcoming_rainfall;

    #[tokio::test]
    async fn serves_fixed_snapshot() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 23).unwrap();
        let source = DemoWeatherSource::new(StdDuration::ZERO).with_start_date(start);
        let snapshot = source.fetch_current_and_forecast(" Nashik ").await.unwrap();

        assert_eq!(snapshot.location.name, "Nashik");
        assert_eq!(snapshot.location.country, "Demo");
        assert_eq!(snapshot.current.temperature_c, 24.0);
        assert_eq!(snapshot.current.humidity_percent, 65.0);
        assert_eq!(snapshot.forecast.len(), 5);
        assert_eq!(snapshot.forecast[0].label, "Today");
        assert_eq!(
            snapshot.forecast[4].date,
            NaiveDate::from_ymd_opt(2025, 5, 27).unwrap()
        );
        assert!((upcoming_rainfall(&snapshot.forecast) - 23.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn blank_location_is_lookup_failure() {
        let source = DemoWeatherSource::new(StdDuration::ZERO);
        let err = source.fetch_current_and_forecast("").await.unwrap_err();
        assert!(matches!(err, CropAdvisorError::LookupFailure(_)));
    }

    #[tokio::test]
    async fn simulated_latency_is_applied() {
        let source = DemoWeatherSource::new(StdDuration::from_millis(50));
        let before = tokio::time::Instant::now();
        source.fetch_current_and_forecast("Pune").await.unwrap();
        assert!(before.elapsed() >= StdDuration::from_millis(50));
    }
}
