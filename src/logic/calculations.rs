use crate::models::ForecastDay;

/// Forecast indices summed for upcoming rainfall: the three days after today.
pub const UPCOMING_RAIN_WINDOW: std::ops::RangeInclusive<usize> = 1..=3;

/// Total forecast rainfall (mm) over the three days following today.
/// Missing days count as zero, so a short forecast yields a smaller sum.
pub fn upcoming_rainfall(forecast: &[ForecastDay]) -> f64 {
    forecast
        .iter()
        .enumerate()
        .filter(|(i, _)| UPCOMING_RAIN_WINDOW.contains(i))
        .map(|(_, day)| day.rainfall_mm)
        .sum()
}

/// One-decimal rendering of a rainfall figure. Halves round away from zero,
/// so 0.25mm prints as "0.3".
pub fn format_rainfall(mm: f64) -> String {
    format!("{:.1}", (mm * 10.0).round() / 10.0)
}

/// Mean forecast temperature across all supplied days
pub fn average_forecast_temp(forecast: &[ForecastDay]) -> Option<f64> {
    if forecast.is_empty() {
        None
    } else {
        Some(forecast.iter().map(|d| d.temperature_c).sum::<f64>() / forecast.len() as f64)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::forecast_with_rain;
    use super::*;

    #[test]
    fn sums_days_one_through_three() {
        let forecast = forecast_with_rain(&[2.5, 0.0, 15.0, 8.0, 0.0]);
        assert!((upcoming_rainfall(&forecast) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn ignores_today_and_day_five() {
        let forecast = forecast_with_rain(&[100.0, 1.0, 1.0, 1.0, 100.0]);
        assert!((upcoming_rainfall(&forecast) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn short_forecast_is_zero_padded() {
        assert_eq!(upcoming_rainfall(&forecast_with_rain(&[12.0])), 0.0);
        assert_eq!(upcoming_rainfall(&[]), 0.0);
        assert!((upcoming_rainfall(&forecast_with_rain(&[0.0, 4.0, 6.5])) - 10.5).abs() < 1e-9);
    }

    #[test]
    fn rainfall_halves_round_up() {
        assert_eq!(format_rainfall(0.25), "0.3");
        assert_eq!(format_rainfall(1.25), "1.3");
        assert_eq!(format_rainfall(30.25), "30.3");
        assert_eq!(format_rainfall(6.04), "6.0");
        assert_eq!(format_rainfall(0.0), "0.0");
    }

    #[test]
    fn average_temp() {
        assert!(average_forecast_temp(&[]).is_none());
        let forecast = forecast_with_rain(&[0.0, 0.0, 0.0]);
        assert!((average_forecast_temp(&forecast).unwrap() - 23.0).abs() < 1e-9);
    }
}
