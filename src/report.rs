//! Plain-text rendering of reports and the crop table.

use crate::logic::calculations::{average_forecast_temp, format_rainfall, upcoming_rainfall};
use crate::logic::AdvisoryReport;
use crate::models::CropProfile;
use chrono::Month;
use std::fmt;

pub fn render_report(report: &AdvisoryReport) -> String {
    ReportText(report).to_string()
}

pub fn render_crops(crops: &[(&str, CropProfile)]) -> String {
    CropTable(crops).to_string()
}

struct ReportText<'a>(&'a AdvisoryReport);

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let weather = &report.weather;
        let current = &weather.current;

        writeln!(f, "Location: {}", weather.location)?;
        writeln!(
            f,
            "Crop: {} | Month: {}",
            report.crop.name,
            month_name(report.month)
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "Current Weather  {} {}",
            current.condition.symbol(),
            current.description
        )?;
        writeln!(
            f,
            "  Temperature: {}°C   Humidity: {}%   Wind: {} km/h   Rainfall: {}mm",
            current.temperature_c, current.humidity_percent, current.wind_speed_kmh, current.rainfall_mm
        )?;
        writeln!(f)?;

        writeln!(f, "{}-Day Forecast", weather.forecast.len())?;
        for day in &weather.forecast {
            writeln!(
                f,
                "  {:<9} {}  {} {:<16} {:>5}°C {:>4}% {:>6}mm",
                day.label,
                day.date.format("%b %d"),
                day.condition.symbol(),
                day.description,
                day.temperature_c,
                day.humidity_percent,
                day.rainfall_mm
            )?;
        }
        if let Some(avg) = average_forecast_temp(&weather.forecast) {
            writeln!(
                f,
                "  Avg temp {:.1}°C, {}mm expected over the next 3 days",
                avg,
                format_rainfall(upcoming_rainfall(&weather.forecast))
            )?;
        }
        writeln!(f)?;

        write_crop_summary(f, report.crop)?;
        writeln!(f)?;

        let warnings = report.advisories.iter().filter(|a| a.is_warning()).count();
        writeln!(
            f,
            "Recommendations ({}, {} warning{})",
            report.advisories.len(),
            warnings,
            if warnings == 1 { "" } else { "s" }
        )?;
        if report.advisories.is_empty() {
            writeln!(f, "  No recommendations.")?;
        }
        for advisory in &report.advisories {
            writeln!(
                f,
                "  {} {:<12} {}",
                advisory.severity.symbol(),
                advisory.category,
                advisory.message
            )?;
            writeln!(f, "    Action: {}", advisory.action)?;
        }

        Ok(())
    }
}

fn write_crop_summary(f: &mut fmt::Formatter<'_>, crop: &CropProfile) -> fmt::Result {
    writeln!(f, "Selected Crop: {}", crop.name)?;
    writeln!(
        f,
        "  Optimal Temperature: {}°C - {}°C",
        crop.optimal_temperature.min, crop.optimal_temperature.max
    )?;
    writeln!(
        f,
        "  Optimal Humidity: {}% - {}%",
        crop.optimal_humidity.min, crop.optimal_humidity.max
    )?;
    writeln!(f, "  Water Requirement: {}", crop.water_requirement)
}

struct CropTable<'a>(&'a [(&'a str, CropProfile)]);

impl fmt::Display for CropTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:<12} {:<10} {:<10} {:<7} {:<18} {}",
            "KEY", "NAME", "TEMP °C", "HUMIDITY %", "WATER", "PLANTING", "HARVEST"
        )?;
        for (key, crop) in self.0 {
            writeln!(
                f,
                "{:<8} {:<12} {:<10} {:<10} {:<7} {:<18} {}",
                key,
                crop.name,
                format!("{}-{}", crop.optimal_temperature.min, crop.optimal_temperature.max),
                format!("{}-{}", crop.optimal_humidity.min, crop.optimal_humidity.max),
                crop.water_requirement,
                months_list(crop.planting_months),
                months_list(crop.harvest_months)
            )?;
            writeln!(f, "         stages: {}", crop.growth_stages.join(" → "))?;
        }
        Ok(())
    }
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

fn months_list(months: &[u32]) -> String {
    months
        .iter()
        .map(|m| month_name(*m).chars().take(3).collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
}
