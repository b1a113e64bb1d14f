//! Weather records returned by the forecast endpoints.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Fixed list of weather summaries, ordered coolest to hottest.
///
/// The order is descriptive only: summaries are drawn uniformly and are not
/// tied to the generated temperature.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Eight-point compass wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];
}

/// Kind of weather alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub enum AlertType {
    Thunderstorm,
    #[serde(rename = "Heavy Rain")]
    HeavyRain,
    Snow,
    #[serde(rename = "Heat Wave")]
    HeatWave,
    #[serde(rename = "Cold Wave")]
    ColdWave,
    #[serde(rename = "High Wind")]
    HighWind,
}

impl AlertType {
    pub const ALL: [AlertType; 6] = [
        AlertType::Thunderstorm,
        AlertType::HeavyRain,
        AlertType::Snow,
        AlertType::HeatWave,
        AlertType::ColdWave,
        AlertType::HighWind,
    ];
}

/// Alert severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Severe,
    ];
}

/// Basic weather forecast for a single point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherForecast {
    /// Date and time of the forecast
    pub date: DateTime<Utc>,
    /// Temperature in Celsius (-50 to 60)
    pub temperature_c: i32,
    /// Temperature in Fahrenheit, derived from `temperature_c`
    pub temperature_f: i32,
    /// Weather summary (e.g., "Mild")
    pub summary: String,
    /// Humidity percentage (0 to 100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    /// Precipitation in mm
    pub precipitation: f64,
    /// Atmospheric pressure in hPa (900 to 1100)
    pub pressure: u16,
}

/// A time-bounded weather warning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherAlert {
    pub alert_type: AlertType,
    pub severity: Severity,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Weather forecast extended with sky conditions and active alerts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct DetailedWeatherForecast {
    pub date: DateTime<Utc>,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    pub precipitation: f64,
    pub pressure: u16,
    /// Cloud cover percentage (0 to 100)
    pub cloud_cover: u8,
    /// UV index (0 to 11)
    pub uv_index: f64,
    /// Visibility in km
    pub visibility: u16,
    /// Active weather alerts, `null` when none apply
    pub alerts: Option<Vec<WeatherAlert>>,
}

/// Aggregate measures over a generated sample of forecasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherStatistics {
    pub average_temperature_c: f64,
    pub max_temperature_c: i32,
    pub min_temperature_c: i32,
    pub average_humidity: f64,
    /// Total precipitation in mm
    pub total_precipitation: f64,
    /// Average wind speed in km/h
    pub average_wind_speed: f64,
    pub days_analyzed: u32,
}

/// Convert a Celsius temperature to the nearest whole Fahrenheit degree
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (32.0 + f64::from(celsius) * 9.0 / 5.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(100), 212);
        assert_eq!(celsius_to_fahrenheit(-40), -40);
        // 22 * 1.8 + 32 = 71.6
        assert_eq!(celsius_to_fahrenheit(22), 72);
        // -20 * 1.8 + 32 = -4.0
        assert_eq!(celsius_to_fahrenheit(-20), -4);
        // 55 * 1.8 + 32 = 131.0
        assert_eq!(celsius_to_fahrenheit(55), 131);
    }

    #[test]
    fn test_alert_type_wire_names() {
        let json = serde_json::to_string(&AlertType::ALL).unwrap();
        assert_eq!(
            json,
            r#"["Thunderstorm","Heavy Rain","Snow","Heat Wave","Cold Wave","High Wind"]"#
        );

        let parsed: AlertType = serde_json::from_str(r#""Cold Wave""#).unwrap();
        assert_eq!(parsed, AlertType::ColdWave);
    }

    #[test]
    fn test_wind_direction_and_severity_wire_names() {
        assert_eq!(
            serde_json::to_string(&WindDirection::ALL).unwrap(),
            r#"["N","NE","E","SE","S","SW","W","NW"]"#
        );
        assert_eq!(
            serde_json::to_string(&Severity::ALL).unwrap(),
            r#"["Low","Moderate","High","Severe"]"#
        );
    }
}
