//! Request and response models for the HTTP surface.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Default number of days for the forecast endpoints
pub const DEFAULT_FORECAST_DAYS: u32 = 5;

/// Default number of days sampled by the statistics endpoint
pub const DEFAULT_STATISTICS_DAYS: u32 = 7;

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthCheck {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Landing document served at `/`
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct RootResponse {
    pub message: String,
    /// Path of the OpenAPI document
    pub documentation: String,
    pub alternative_docs: String,
}

/// Query parameters for the day-count endpoints
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct DaysQuery {
    /// Number of days to forecast or analyze
    pub days: Option<u32>,
}

/// Query parameters carrying an optional city
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CityQuery {
    /// City name (optional)
    pub city: Option<String>,
}

/// Query parameters for the detailed forecast endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct DetailedForecastQuery {
    /// Date for the forecast (ISO 8601, e.g. 2030-01-01T12:00:00Z)
    pub date: String,
    /// City name (optional)
    pub city: Option<String>,
}

/// Body of the custom forecast request endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherForecastRequest {
    /// City name for the forecast
    pub city: Option<String>,
    /// Number of days to forecast (1-30, default 5)
    pub days: Option<u32>,
}

impl WeatherForecastRequest {
    /// Requested day count, falling back to the default when omitted
    pub fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_FORECAST_DAYS)
    }

    /// City name when present and not blank
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_request_defaults() {
        let request: WeatherForecastRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.days(), DEFAULT_FORECAST_DAYS);
        assert_eq!(request.city(), None);
    }

    #[test]
    fn test_forecast_request_blank_city_is_ignored() {
        let request: WeatherForecastRequest =
            serde_json::from_str(r#"{"city": "   ", "days": 3}"#).unwrap();
        assert_eq!(request.days(), 3);
        assert_eq!(request.city(), None);

        let request: WeatherForecastRequest =
            serde_json::from_str(r#"{"city": "London", "days": 7}"#).unwrap();
        assert_eq!(request.city(), Some("London"));
    }
}
