pub mod demo;
pub mod openweathermap;

pub use demo::DemoWeatherSource;
pub use openweathermap::OpenWeatherMapClient;

use crate::config::{Config, WeatherProvider};
use crate::error::{CropAdvisorError, Result};
use crate::models::WeatherSnapshot;
use std::time::Duration;

/// The configured weather provider.
pub enum WeatherSource {
    Demo(DemoWeatherSource),
    OpenWeatherMap(OpenWeatherMapClient),
}

impl WeatherSource {
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.weather.provider {
            WeatherProvider::Demo => Ok(WeatherSource::Demo(DemoWeatherSource::new(
                Duration::from_millis(config.weather.simulated_latency_ms),
            ))),
            WeatherProvider::OpenWeatherMap => config
                .openweathermap
                .as_ref()
                .filter(|c| c.enabled && !c.api_key.is_empty())
                .map(|c| {
                    tracing::info!("OpenWeatherMap client configured");
                    WeatherSource::OpenWeatherMap(OpenWeatherMapClient::new(c.clone()))
                })
                .ok_or_else(|| {
                    CropAdvisorError::Config("OpenWeatherMap selected but not configured".into())
                }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeatherSource::Demo(_) => "Demo",
            WeatherSource::OpenWeatherMap(_) => "OpenWeatherMap",
        }
    }

    /// Current conditions plus a daily forecast starting today.
    pub async fn fetch_current_and_forecast(&self, location_query: &str) -> Result<WeatherSnapshot> {
        match self {
            WeatherSource::Demo(source) => source.fetch_current_and_forecast(location_query).await,
            WeatherSource::OpenWeatherMap(client) => {
                client.fetch_current_and_forecast(location_query).await
            }
        }
    }

    pub async fn test_connection(&self) -> Result<bool> {
        match self {
            WeatherSource::Demo(_) => Ok(true),
            WeatherSource::OpenWeatherMap(client) => client.test_connection().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpenWeatherMapConfig;

    #[test]
    fn default_config_selects_demo() {
        let source = WeatherSource::from_config(&Config::default()).unwrap();
        assert_eq!(source.name(), "Demo");
    }

    #[test]
    fn openweathermap_requires_enabled_key() {
        let mut config = Config::default();
        config.weather.provider = WeatherProvider::OpenWeatherMap;
        assert!(WeatherSource::from_config(&config).is_err());

        config.openweathermap = Some(OpenWeatherMapConfig {
            api_key: "key".into(),
            enabled: false,
        });
        assert!(WeatherSource::from_config(&config).is_err());

        config.openweathermap = Some(OpenWeatherMapConfig {
            api_key: "key".into(),
            enabled: true,
        });
        let source = WeatherSource::from_config(&config).unwrap();
        assert_eq!(source.name(), "OpenWeatherMap");
    }

    #[tokio::test]
    async fn demo_connection_always_ok() {
        let source = WeatherSource::from_config(&Config::default()).unwrap();
        assert!(source.test_connection().await.unwrap());
    }
}
