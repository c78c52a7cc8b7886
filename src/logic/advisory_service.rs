use crate::datasources::WeatherSource;
use crate::error::{CropAdvisorError, Result};
use crate::logic::AdvisoryEngine;
use crate::models::{Advisory, CropProfile, WeatherSnapshot};
use crate::registry;
use chrono::{Datelike, Local};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one analysis: the inputs the engine saw and what it said.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub crop_key: String,
    pub crop: &'static CropProfile,
    pub month: u32,
    pub weather: WeatherSnapshot,
    pub advisories: Vec<Advisory>,
}

/// Resolves the crop, fetches weather, then runs the rules.
pub struct AdvisoryService {
    source: WeatherSource,
    engine: AdvisoryEngine,
    timeout: Duration,
}

impl AdvisoryService {
    pub fn new(source: WeatherSource, timeout: Duration) -> Self {
        Self {
            source,
            engine: AdvisoryEngine::new(),
            timeout,
        }
    }

    pub fn source(&self) -> &WeatherSource {
        &self.source
    }

    pub fn engine(&self) -> &AdvisoryEngine {
        &self.engine
    }

    /// Run one analysis. `month` defaults to the current local month.
    ///
    /// The engine only runs once both the crop and the weather have been
    /// resolved; any failure before that is returned as-is.
    pub async fn analyze(
        &self,
        location: &str,
        crop_key: &str,
        month: Option<u32>,
    ) -> Result<AdvisoryReport> {
        if location.trim().is_empty() || crop_key.trim().is_empty() {
            return Err(CropAdvisorError::InvalidInput(
                "Please enter a location and select a crop".to_string(),
            ));
        }

        let month = match month {
            Some(m) if (1..=12).contains(&m) => m,
            Some(m) => {
                return Err(CropAdvisorError::InvalidInput(format!(
                    "Month must be between 1 and 12, got {}",
                    m
                )))
            }
            None => Local::now().month(),
        };

        let crop = registry::lookup(crop_key)?;
        let weather = self.fetch(location).await?;

        let advisories =
            self.engine
                .evaluate(month, &weather.current, &weather.forecast, Some(crop));

        tracing::info!(
            crop = crop.name,
            month,
            location = %weather.location,
            count = advisories.len(),
            "advisories generated"
        );

        Ok(AdvisoryReport {
            crop_key: crop_key.trim().to_lowercase(),
            crop,
            month,
            weather,
            advisories,
        })
    }

    async fn fetch(&self, location: &str) -> Result<WeatherSnapshot> {
        tracing::debug!(source = self.source.name(), location, "fetching weather");

        match tokio::time::timeout(self.timeout, self.source.fetch_current_and_forecast(location))
            .await
        {
            Ok(result) => result.inspect_err(|e| tracing::warn!("Weather fetch failed: {}", e)),
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "weather fetch timed out");
                Err(CropAdvisorError::UpstreamUnavailable(format!(
                    "{} did not respond within {}s",
                    self.source.name(),
                    self.timeout.as_secs_f64()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::DemoWeatherSource;
    use crate::models::{AdvisoryCategory, Severity};

    fn demo_service(latency_ms: u64, timeout_ms: u64) -> AdvisoryService {
        AdvisoryService::new(
            WeatherSource::Demo(DemoWeatherSource::new(Duration::from_millis(latency_ms))),
            Duration::from_millis(timeout_ms),
        )
    }

    #[tokio::test]
    async fn demo_rice_in_june() {
        let report = demo_service(0, 1000)
            .analyze("Cuttack", "Rice", Some(6))
            .await
            .unwrap();

        assert_eq!(report.crop_key, "rice");
        assert_eq!(report.crop.name, "Rice");
        assert_eq!(report.month, 6);
        let shape: Vec<_> = report
            .advisories
            .iter()
            .map(|a| (a.severity, a.category))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Severity::Success, AdvisoryCategory::Temperature),
                (Severity::Success, AdvisoryCategory::Humidity),
                (Severity::Info, AdvisoryCategory::Irrigation),
                (Severity::Success, AdvisoryCategory::Planting),
            ]
        );
        assert!(report.advisories[2].message.contains("23.0mm"));
    }

    #[tokio::test]
    async fn blank_inputs_are_rejected() {
        let service = demo_service(0, 1000);
        for (location, crop) in [("", "rice"), ("Pune", " "), ("", "")] {
            let err = service.analyze(location, crop, Some(6)).await.unwrap_err();
            assert!(matches!(err, CropAdvisorError::InvalidInput(_)));
            assert_eq!(err.to_string(), "Please enter a location and select a crop");
        }
    }

    #[tokio::test]
    async fn unknown_crop_is_not_found() {
        let err = demo_service(0, 1000)
            .analyze("Pune", "barley", Some(6))
            .await
            .unwrap_err();
        assert!(matches!(err, CropAdvisorError::NotFound(_)));
    }

    #[tokio::test]
    async fn bad_month_is_rejected() {
        let err = demo_service(0, 1000)
            .analyze("Pune", "rice", Some(13))
            .await
            .unwrap_err();
        assert!(matches!(err, CropAdvisorError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn slow_source_times_out() {
        let err = demo_service(500, 20)
            .analyze("Pune", "rice", Some(6))
            .await
            .unwrap_err();
        assert!(matches!(err, CropAdvisorError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn defaults_to_current_month() {
        let report = demo_service(0, 1000)
            .analyze("Pune", "wheat", None)
            .await
            .unwrap();
        assert_eq!(report.month, Local::now().month());
    }
}
