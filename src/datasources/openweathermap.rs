use crate::config::OpenWeatherMapConfig;
use crate::error::{CropAdvisorError, Result};
use crate::models::{
    day_label, ForecastDay, Location, WeatherCondition, WeatherReading, WeatherSnapshot,
};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Days kept from the 5-day/3-hour forecast.
const FORECAST_DAYS: usize = 5;

/// m/s to km/h
const MS_TO_KMH: f64 = 3.6;

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    dt: i64,
    /// Shift from UTC in seconds
    #[serde(default)]
    timezone: i32,
    name: String,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
    #[serde(default)]
    rain: Option<OwmHourlyPrecipitation>,
    #[serde(default)]
    snow: Option<OwmHourlyPrecipitation>,
    sys: OwmSys,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwmHourlyPrecipitation {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
    #[serde(default)]
    city: Option<OwmCity>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    #[serde(default)]
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    #[serde(default)]
    rain: Option<OwmPrecipitation>,
    #[serde(default)]
    snow: Option<OwmPrecipitation>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    id: u32,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmPrecipitation {
    #[serde(rename = "3h", default)]
    three_hour: f64,
}

/// A 3-hour forecast point after unit conversion.
struct ForecastPoint {
    timestamp: DateTime<Utc>,
    temperature_c: f64,
    humidity_percent: f64,
    precipitation_mm: f64,
    condition: WeatherCondition,
    description: String,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Resolve a city query and fetch current conditions plus a daily forecast.
    pub async fn fetch_current_and_forecast(&self, location_query: &str) -> Result<WeatherSnapshot> {
        let query = location_query.trim();
        if query.is_empty() {
            return Err(CropAdvisorError::LookupFailure(
                "no location given".to_string(),
            ));
        }

        let current: OwmCurrentResponse = self.get("weather", query).await?;
        let forecast: OwmForecastResponse = self.get("forecast", query).await?;

        tracing::info!(
            city = %current.name,
            points = forecast.list.len(),
            "OpenWeatherMap data fetched"
        );

        Ok(convert_response(current, forecast))
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let url = self.endpoint_url("weather", "London")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CropAdvisorError::UpstreamUnavailable(format!("OpenWeatherMap: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn endpoint_url(&self, endpoint: &str, query: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/{}", API_BASE_URL, endpoint),
            &[
                ("q", query),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ],
        )
        .map_err(|e| CropAdvisorError::InvalidInput(format!("Invalid location query: {}", e)))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint, query)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CropAdvisorError::UpstreamUnavailable(format!("OpenWeatherMap: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CropAdvisorError::LookupFailure(format!(
                "location '{}' not found",
                query
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CropAdvisorError::UpstreamUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            CropAdvisorError::UpstreamUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })
    }
}

fn convert_response(current: OwmCurrentResponse, forecast: OwmForecastResponse) -> WeatherSnapshot {
    let (condition, description) = first_condition(&current.weather);

    // Combine rain and snow precipitation
    let rain_mm = current.rain.as_ref().map(|r| r.one_hour).unwrap_or(0.0);
    let snow_mm = current.snow.as_ref().map(|s| s.one_hour).unwrap_or(0.0);

    let reading = WeatherReading {
        temperature_c: current.main.temp,
        humidity_percent: current.main.humidity,
        wind_speed_kmh: current.wind.speed * MS_TO_KMH,
        rainfall_mm: rain_mm + snow_mm,
        condition,
        description,
    };

    let offset_secs = forecast
        .city
        .as_ref()
        .and_then(|c| c.timezone)
        .unwrap_or(current.timezone);
    let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());
    let observed = DateTime::from_timestamp(current.dt, 0).unwrap_or_else(Utc::now);
    let today = observed.with_timezone(&offset).date_naive();

    let points: Vec<ForecastPoint> = forecast.list.iter().map(convert_forecast_item).collect();
    let days = aggregate_daily(&points, today, offset, &reading);

    WeatherSnapshot {
        fetched_at: Utc::now(),
        location: Location {
            name: current.name,
            country: current.sys.country,
            state: String::new(),
        },
        current: reading,
        forecast: days,
    }
}

fn first_condition(weather: &[OwmWeather]) -> (WeatherCondition, String) {
    weather
        .first()
        .map(|w| (WeatherCondition::from_owm_id(w.id), w.description.clone()))
        .unwrap_or_default()
}

fn convert_forecast_item(item: &OwmForecastItem) -> ForecastPoint {
    let timestamp = DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now);
    let (condition, description) = first_condition(&item.weather);

    let rain_mm = item.rain.as_ref().map(|r| r.three_hour).unwrap_or(0.0);
    let snow_mm = item.snow.as_ref().map(|s| s.three_hour).unwrap_or(0.0);

    ForecastPoint {
        timestamp,
        temperature_c: item.main.temp,
        humidity_percent: item.main.humidity,
        precipitation_mm: rain_mm + snow_mm,
        condition,
        description,
    }
}

/// Group 3-hour points into days at the location's local midnight, starting
/// at `today`. Points before `today` are dropped.
fn aggregate_daily(
    points: &[ForecastPoint],
    today: NaiveDate,
    offset: FixedOffset,
    current: &WeatherReading,
) -> Vec<ForecastDay> {
    let mut by_date: HashMap<NaiveDate, Vec<&ForecastPoint>> = HashMap::new();
    for point in points {
        by_date
            .entry(point.timestamp.with_timezone(&offset).date_naive())
            .or_default()
            .push(point);
    }

    let mut days = Vec::with_capacity(FORECAST_DAYS);
    for index in 0..FORECAST_DAYS {
        let date = today + Duration::days(index as i64);
        match by_date.get(&date) {
            Some(day_points) => days.push(aggregate_day(index, date, day_points)),
            // Late in the day the list already starts at tomorrow
            None if index == 0 => days.push(day_from_reading(date, current)),
            None => break,
        }
    }
    days
}

fn day_from_reading(date: NaiveDate, reading: &WeatherReading) -> ForecastDay {
    ForecastDay {
        label: day_label(0),
        date,
        temperature_c: reading.temperature_c,
        humidity_percent: reading.humidity_percent,
        rainfall_mm: reading.rainfall_mm,
        condition: reading.condition,
        description: reading.description.clone(),
    }
}

fn aggregate_day(index: usize, date: NaiveDate, points: &[&ForecastPoint]) -> ForecastDay {
    let count = points.len().max(1) as f64;
    let temperature_c = points.iter().map(|p| p.temperature_c).sum::<f64>() / count;
    let humidity_percent = points.iter().map(|p| p.humidity_percent).sum::<f64>() / count;
    let rainfall_mm: f64 = points.iter().map(|p| p.precipitation_mm).sum();

    // Find dominant weather condition (most frequent, earliest wins ties)
    let mut condition_counts: HashMap<WeatherCondition, usize> = HashMap::new();
    for point in points {
        *condition_counts.entry(point.condition).or_insert(0) += 1;
    }
    let dominant = points
        .iter()
        .max_by(|a, b| {
            condition_counts[&a.condition]
                .cmp(&condition_counts[&b.condition])
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        })
        .copied();

    ForecastDay {
        label: day_label(index),
        date,
        temperature_c: (temperature_c * 10.0).round() / 10.0,
        humidity_percent: humidity_percent.round(),
        rainfall_mm: (rainfall_mm * 10.0).round() / 10.0,
        condition: dominant.map(|p| p.condition).unwrap_or_default(),
        description: dominant.map(|p| p.description.clone()).unwrap_or_default(),
    }
}
