//! Forecast service: validates caller input and dispatches to the generator.

use crate::{
    error::ApiError,
    models::{
        DetailedWeatherForecast, WeatherAlert, WeatherForecast, WeatherForecastRequest,
        WeatherStatistics,
    },
    services::generator::{ForecastGenerator, compute_statistics},
};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Bounds for the forecast endpoints
pub const FORECAST_DAYS_RANGE: (u32, u32) = (1, 30);

/// Bounds for the statistics endpoint
pub const STATISTICS_DAYS_RANGE: (u32, u32) = (1, 365);

/// Reject day counts outside `range` (inclusive)
pub fn validate_days(days: u32, range: (u32, u32)) -> Result<u32, ApiError> {
    let (min, max) = range;
    if (min..=max).contains(&days) {
        Ok(days)
    } else {
        tracing::debug!(days, min, max, "Rejected day count");
        Err(ApiError::InvalidDays { min, max })
    }
}

/// Reject city names that are empty after trimming
pub fn validate_city(city: &str) -> Result<&str, ApiError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        tracing::debug!("Rejected blank city name");
        return Err(ApiError::EmptyCity);
    }
    Ok(trimmed)
}

/// Parse an ISO 8601 date from a query string
///
/// Accepts RFC 3339 timestamps with an offset, naive timestamps (taken as
/// UTC), and bare dates (midnight UTC).
pub fn parse_forecast_date(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(date.and_utc());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(date.and_utc());
    }
    if let Some(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(date.and_utc());
    }

    Err(ApiError::InvalidDate(raw.to_string()))
}

/// Service layer for weather forecast operations
///
/// City names are accepted and validated but do not influence generation.
pub struct WeatherForecastService<R: Rng> {
    generator: ForecastGenerator<R>,
}

impl WeatherForecastService<ThreadRng> {
    pub fn new() -> Self {
        Self {
            generator: ForecastGenerator::new(),
        }
    }
}

impl Default for WeatherForecastService<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WeatherForecastService<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            generator: ForecastGenerator::with_rng(rng),
        }
    }

    /// One forecast per day offset `1..=days` from now, ascending
    pub fn get_forecast(&mut self, days: u32) -> Result<Vec<WeatherForecast>, ApiError> {
        let days = validate_days(days, FORECAST_DAYS_RANGE)?;
        Ok(self.forecast_sample(days))
    }

    pub fn get_forecast_by_city(
        &mut self,
        city: &str,
        days: u32,
    ) -> Result<Vec<WeatherForecast>, ApiError> {
        let city = validate_city(city)?;
        let days = validate_days(days, FORECAST_DAYS_RANGE)?;
        tracing::debug!(city, days, "Generating city forecast");
        Ok(self.forecast_sample(days))
    }

    pub fn get_current_weather(&mut self, city: Option<&str>) -> WeatherForecast {
        tracing::debug!(city = ?city, "Generating current weather");
        self.generator.generate_forecast(Utc::now())
    }

    /// Detailed forecast for `date`, which must not lie before `now`
    pub fn get_detailed_forecast(
        &mut self,
        date: DateTime<Utc>,
        city: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<DetailedWeatherForecast, ApiError> {
        if date < now {
            tracing::debug!(%date, %now, "Rejected past forecast date");
            return Err(ApiError::PastDate);
        }
        tracing::debug!(%date, city = ?city, "Generating detailed forecast");
        Ok(self.generator.generate_detailed_forecast(date))
    }

    pub fn get_detailed_forecasts(
        &mut self,
        days: u32,
    ) -> Result<Vec<DetailedWeatherForecast>, ApiError> {
        let days = validate_days(days, FORECAST_DAYS_RANGE)?;
        let now = Utc::now();
        Ok((1..=i64::from(days))
            .map(|offset| {
                self.generator
                    .generate_detailed_forecast(now + Duration::days(offset))
            })
            .collect())
    }

    pub fn get_weather_alerts(&mut self, city: Option<&str>) -> Vec<WeatherAlert> {
        self.generator.generate_alerts_batch(city)
    }

    /// Statistics over `days` freshly generated forecasts
    pub fn get_weather_statistics(&mut self, days: u32) -> Result<WeatherStatistics, ApiError> {
        let days = validate_days(days, STATISTICS_DAYS_RANGE)?;
        let sample = self.forecast_sample(days);
        Ok(compute_statistics(&sample, days))
    }

    /// Combined request: a non-blank city routes to the city forecast
    pub fn create_forecast_request(
        &mut self,
        request: &WeatherForecastRequest,
    ) -> Result<Vec<WeatherForecast>, ApiError> {
        let days = validate_days(request.days(), FORECAST_DAYS_RANGE)?;
        match request.city() {
            Some(city) => self.get_forecast_by_city(city, days),
            None => self.get_forecast(days),
        }
    }

    fn forecast_sample(&mut self, days: u32) -> Vec<WeatherForecast> {
        let now = Utc::now();
        (1..=i64::from(days))
            .map(|offset| self.generator.generate_forecast(now + Duration::days(offset)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service() -> WeatherForecastService<StdRng> {
        WeatherForecastService::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_validate_days_bounds() {
        assert_eq!(validate_days(1, FORECAST_DAYS_RANGE).unwrap(), 1);
        assert_eq!(validate_days(30, FORECAST_DAYS_RANGE).unwrap(), 30);
        assert!(matches!(
            validate_days(0, FORECAST_DAYS_RANGE),
            Err(ApiError::InvalidDays { min: 1, max: 30 })
        ));
        assert!(validate_days(31, FORECAST_DAYS_RANGE).is_err());
        assert_eq!(validate_days(365, STATISTICS_DAYS_RANGE).unwrap(), 365);
        assert!(validate_days(366, STATISTICS_DAYS_RANGE).is_err());
    }

    #[test]
    fn test_validate_city() {
        assert_eq!(validate_city("  Paris ").unwrap(), "Paris");
        assert!(matches!(validate_city(""), Err(ApiError::EmptyCity)));
        assert!(matches!(validate_city(" \t "), Err(ApiError::EmptyCity)));
    }

    #[test]
    fn test_parse_forecast_date_formats() {
        let with_offset = parse_forecast_date("2030-06-01T12:30:00+02:00").unwrap();
        assert_eq!(with_offset.hour(), 10);

        let zulu = parse_forecast_date("2030-06-01T12:30:00Z").unwrap();
        assert_eq!(zulu.hour(), 12);

        let naive = parse_forecast_date("2030-06-01T12:30:00").unwrap();
        assert_eq!(naive, zulu);

        let minutes_only = parse_forecast_date("2030-06-01T12:30").unwrap();
        assert_eq!(minutes_only, zulu);

        let date_only = parse_forecast_date("2030-06-01").unwrap();
        assert_eq!((date_only.year(), date_only.month(), date_only.day()), (2030, 6, 1));
        assert_eq!(date_only.hour(), 0);

        assert!(matches!(
            parse_forecast_date("next tuesday"),
            Err(ApiError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_forecast_has_ascending_day_offsets() {
        let before = Utc::now();
        let forecasts = service().get_forecast(10).unwrap();
        let after = Utc::now();

        assert_eq!(forecasts.len(), 10);
        for (index, forecast) in forecasts.iter().enumerate() {
            let offset = Duration::days(index as i64 + 1);
            assert!(forecast.date >= before + offset);
            assert!(forecast.date <= after + offset);
        }
        assert!(forecasts.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn test_forecast_rejects_out_of_range_days() {
        let mut service = service();
        assert!(service.get_forecast(0).is_err());
        assert!(service.get_forecast(31).is_err());
        assert!(service.get_detailed_forecasts(0).is_err());
        assert!(service.get_detailed_forecasts(31).is_err());
        assert!(service.get_weather_statistics(0).is_err());
        assert!(service.get_weather_statistics(366).is_err());
    }

    #[test]
    fn test_city_forecast() {
        let mut service = service();
        assert_eq!(service.get_forecast_by_city("London", 3).unwrap().len(), 3);
        assert!(matches!(
            service.get_forecast_by_city("   ", 3),
            Err(ApiError::EmptyCity)
        ));
        assert!(service.get_forecast_by_city("London", 31).is_err());
    }

    #[test]
    fn test_detailed_forecast_date_boundary() {
        let mut service = service();
        let now = Utc::now();

        let same_instant = service.get_detailed_forecast(now, None, now).unwrap();
        assert_eq!(same_instant.date, now);

        let tomorrow = now + Duration::days(1);
        assert!(service.get_detailed_forecast(tomorrow, Some("Berlin"), now).is_ok());

        let yesterday = now - Duration::days(1);
        assert!(matches!(
            service.get_detailed_forecast(yesterday, None, now),
            Err(ApiError::PastDate)
        ));
    }

    #[test]
    fn test_detailed_forecasts_count() {
        let forecasts = service().get_detailed_forecasts(7).unwrap();
        assert_eq!(forecasts.len(), 7);
        assert!(forecasts.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn test_statistics_echo_days() {
        let mut service = service();
        for days in [1, 7, 365] {
            let stats = service.get_weather_statistics(days).unwrap();
            assert_eq!(stats.days_analyzed, days);
            assert!(f64::from(stats.min_temperature_c) <= stats.average_temperature_c);
            assert!(stats.average_temperature_c <= f64::from(stats.max_temperature_c));
        }
    }

    #[test]
    fn test_create_forecast_request_routing() {
        let mut service = service();

        let with_city = WeatherForecastRequest {
            city: Some("Sydney".to_string()),
            days: Some(4),
        };
        assert_eq!(service.create_forecast_request(&with_city).unwrap().len(), 4);

        let blank_city = WeatherForecastRequest {
            city: Some("  ".to_string()),
            days: None,
        };
        assert_eq!(service.create_forecast_request(&blank_city).unwrap().len(), 5);

        let too_many = WeatherForecastRequest {
            city: None,
            days: Some(31),
        };
        assert!(matches!(
            service.create_forecast_request(&too_many),
            Err(ApiError::InvalidDays { min: 1, max: 30 })
        ));
    }
}
