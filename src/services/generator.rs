//! Synthetic weather generator.
//!
//! Fills weather records with bounded random values. The generator owns its
//! random source so production code can use the thread-local RNG while tests
//! supply a seeded one. No draw can fail: every range below is fixed and
//! non-empty.

use crate::models::{
    AlertType, DetailedWeatherForecast, SUMMARIES, Severity, WeatherAlert, WeatherForecast,
    WeatherStatistics, WindDirection, celsius_to_fahrenheit,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;

pub const TEMPERATURE_C_RANGE: (i32, i32) = (-20, 55);
pub const HUMIDITY_RANGE: (u8, u8) = (30, 100);
pub const WIND_SPEED_MAX: f64 = 50.0;
pub const PRECIPITATION_MAX: f64 = 100.0;
pub const PRESSURE_RANGE: (u16, u16) = (980, 1040);
pub const CLOUD_COVER_MAX: u8 = 100;
pub const UV_INDEX_MAX: f64 = 11.0;
pub const VISIBILITY_RANGE: (u16, u16) = (1, 20);
/// Probability that a detailed forecast carries an alert
pub const DETAILED_ALERT_PROBABILITY: f64 = 0.3;
pub const MAX_BATCH_ALERTS: usize = 4;

/// Random weather generator
pub struct ForecastGenerator<R: Rng> {
    rng: R,
}

impl ForecastGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for ForecastGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ForecastGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one basic forecast for `date`
    pub fn generate_forecast(&mut self, date: DateTime<Utc>) -> WeatherForecast {
        let temperature_c = self
            .rng
            .random_range(TEMPERATURE_C_RANGE.0..=TEMPERATURE_C_RANGE.1);

        WeatherForecast {
            date,
            temperature_c,
            temperature_f: celsius_to_fahrenheit(temperature_c),
            summary: self.pick(&SUMMARIES).to_string(),
            humidity: self.rng.random_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1),
            wind_speed: round_to(self.rng.random_range(0.0..=WIND_SPEED_MAX), 2),
            wind_direction: self.pick(&WindDirection::ALL),
            precipitation: round_to(self.rng.random_range(0.0..=PRECIPITATION_MAX), 2),
            pressure: self.rng.random_range(PRESSURE_RANGE.0..=PRESSURE_RANGE.1),
        }
    }

    /// Generate one detailed forecast for `date`
    ///
    /// With probability [`DETAILED_ALERT_PROBABILITY`] the record carries a
    /// single alert starting at `date` and lasting 3 to 24 hours.
    pub fn generate_detailed_forecast(&mut self, date: DateTime<Utc>) -> DetailedWeatherForecast {
        let base = self.generate_forecast(date);

        let alerts = if self.rng.random_bool(DETAILED_ALERT_PROBABILITY) {
            let hours = self.rng.random_range(3..=24);
            Some(vec![WeatherAlert {
                alert_type: self.pick(&AlertType::ALL),
                severity: self.pick(&Severity::ALL),
                description: "Weather alert in effect".to_string(),
                start_time: date,
                end_time: date + Duration::hours(hours),
            }])
        } else {
            None
        };

        DetailedWeatherForecast {
            date: base.date,
            temperature_c: base.temperature_c,
            temperature_f: base.temperature_f,
            summary: base.summary,
            humidity: base.humidity,
            wind_speed: base.wind_speed,
            wind_direction: base.wind_direction,
            precipitation: base.precipitation,
            pressure: base.pressure,
            cloud_cover: self.rng.random_range(0..=CLOUD_COVER_MAX),
            uv_index: round_to(self.rng.random_range(0.0..=UV_INDEX_MAX), 1),
            visibility: self
                .rng
                .random_range(VISIBILITY_RANGE.0..=VISIBILITY_RANGE.1),
            alerts,
        }
    }

    /// Generate a single alert for `city`, or for "your area" when absent
    pub fn generate_alert(&mut self, city: Option<&str>) -> WeatherAlert {
        self.alert_at(1, city, Utc::now())
    }

    /// Generate between zero and [`MAX_BATCH_ALERTS`] independent alerts
    pub fn generate_alerts_batch(&mut self, city: Option<&str>) -> Vec<WeatherAlert> {
        let count = self.rng.random_range(0..=MAX_BATCH_ALERTS);
        let now = Utc::now();
        (1..=count)
            .map(|number| self.alert_at(number, city, now))
            .collect()
    }

    // Start and end offsets are drawn independently; the ranges only meet at
    // +4h, so an alert can end exactly when it starts but never before.
    fn alert_at(&mut self, number: usize, city: Option<&str>, now: DateTime<Utc>) -> WeatherAlert {
        let area = city.unwrap_or("your area");
        let start_offset = self.rng.random_range(-2..=4);
        let end_offset = self.rng.random_range(4..=24);

        WeatherAlert {
            alert_type: self.pick(&AlertType::ALL),
            severity: self.pick(&Severity::ALL),
            description: format!("Weather alert {number} for {area}"),
            start_time: now + Duration::hours(start_offset),
            end_time: now + Duration::hours(end_offset),
        }
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}

/// Compute aggregate statistics over a forecast sample
///
/// `days` is echoed as `days_analyzed`; callers build the sample with exactly
/// that many records.
pub fn compute_statistics(sample: &[WeatherForecast], days: u32) -> WeatherStatistics {
    if sample.is_empty() {
        return WeatherStatistics {
            average_temperature_c: 0.0,
            max_temperature_c: 0,
            min_temperature_c: 0,
            average_humidity: 0.0,
            total_precipitation: 0.0,
            average_wind_speed: 0.0,
            days_analyzed: days,
        };
    }

    let count = sample.len() as f64;
    let temperatures = sample.iter().map(|f| f.temperature_c);
    let max_temperature_c = temperatures.clone().max().unwrap_or_default();
    let min_temperature_c = temperatures.clone().min().unwrap_or_default();
    let temperature_sum: f64 = temperatures.map(f64::from).sum();
    let humidity_sum: f64 = sample.iter().map(|f| f64::from(f.humidity)).sum();
    let precipitation_sum: f64 = sample.iter().map(|f| f.precipitation).sum();
    let wind_speed_sum: f64 = sample.iter().map(|f| f.wind_speed).sum();

    WeatherStatistics {
        average_temperature_c: round_to(temperature_sum / count, 2),
        max_temperature_c,
        min_temperature_c,
        average_humidity: round_to(humidity_sum / count, 2),
        total_precipitation: round_to(precipitation_sum, 2),
        average_wind_speed: round_to(wind_speed_sum / count, 2),
        days_analyzed: days,
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> ForecastGenerator<StdRng> {
        ForecastGenerator::with_rng(StdRng::seed_from_u64(7))
    }

    fn assert_decimals(value: f64, places: i32) {
        let scaled = value * 10f64.powi(places);
        assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "{value} has more than {places} decimals"
        );
    }

    #[test]
    fn test_forecast_values_within_bounds() {
        let mut generator = seeded();
        let date = Utc::now();

        for _ in 0..1000 {
            let forecast = generator.generate_forecast(date);
            assert_eq!(forecast.date, date);
            assert!((-20..=55).contains(&forecast.temperature_c));
            assert_eq!(
                forecast.temperature_f,
                (32.0 + f64::from(forecast.temperature_c) * 9.0 / 5.0).round() as i32
            );
            assert!(SUMMARIES.contains(&forecast.summary.as_str()));
            assert!((30..=100).contains(&forecast.humidity));
            assert!((0.0..=50.0).contains(&forecast.wind_speed));
            assert!((0.0..=100.0).contains(&forecast.precipitation));
            assert!((980..=1040).contains(&forecast.pressure));
            assert_decimals(forecast.wind_speed, 2);
            assert_decimals(forecast.precipitation, 2);
        }
    }

    #[test]
    fn test_detailed_forecast_values_within_bounds() {
        let mut generator = seeded();
        let date = Utc::now() + Duration::days(2);
        let mut with_alerts = 0;

        for _ in 0..1000 {
            let detailed = generator.generate_detailed_forecast(date);
            assert!((-20..=55).contains(&detailed.temperature_c));
            assert_eq!(
                detailed.temperature_f,
                celsius_to_fahrenheit(detailed.temperature_c)
            );
            assert!(detailed.cloud_cover <= 100);
            assert!((0.0..=11.0).contains(&detailed.uv_index));
            assert_decimals(detailed.uv_index, 1);
            assert!((1..=20).contains(&detailed.visibility));

            if let Some(alerts) = detailed.alerts {
                with_alerts += 1;
                assert_eq!(alerts.len(), 1);
                let alert = &alerts[0];
                assert_eq!(alert.start_time, date);
                let hours = (alert.end_time - alert.start_time).num_hours();
                assert!((3..=24).contains(&hours));
            }
        }

        // 0.3 of 1000 draws; wide margin keeps this stable for any seed
        assert!((150..=450).contains(&with_alerts), "{with_alerts} alerts");
    }

    #[test]
    fn test_alert_batch_size_and_members() {
        let mut generator = seeded();
        let mut seen_sizes = [false; MAX_BATCH_ALERTS + 1];

        for _ in 0..500 {
            let before = Utc::now();
            let alerts = generator.generate_alerts_batch(Some("Tokyo"));
            let after = Utc::now();

            assert!(alerts.len() <= MAX_BATCH_ALERTS);
            seen_sizes[alerts.len()] = true;

            for (index, alert) in alerts.iter().enumerate() {
                assert!(AlertType::ALL.contains(&alert.alert_type));
                assert!(Severity::ALL.contains(&alert.severity));
                assert_eq!(
                    alert.description,
                    format!("Weather alert {} for Tokyo", index + 1)
                );
                assert!(alert.start_time >= before - Duration::hours(2));
                assert!(alert.start_time <= after + Duration::hours(4));
                assert!(alert.end_time >= before + Duration::hours(4));
                assert!(alert.end_time <= after + Duration::hours(24));
                assert!(alert.end_time >= alert.start_time);
            }
        }

        assert!(seen_sizes.iter().all(|seen| *seen));
    }

    #[test]
    fn test_alert_defaults_to_your_area() {
        let mut generator = seeded();
        let alert = generator.generate_alert(None);
        assert_eq!(alert.description, "Weather alert 1 for your area");
    }

    #[test]
    fn test_statistics_over_sample() {
        let mut generator = seeded();
        let now = Utc::now();
        let sample: Vec<_> = (1..=30)
            .map(|day| generator.generate_forecast(now + Duration::days(day)))
            .collect();

        let stats = compute_statistics(&sample, 30);
        assert_eq!(stats.days_analyzed, 30);
        assert!(f64::from(stats.min_temperature_c) <= stats.average_temperature_c);
        assert!(stats.average_temperature_c <= f64::from(stats.max_temperature_c));
        assert_eq!(
            stats.max_temperature_c,
            sample.iter().map(|f| f.temperature_c).max().unwrap()
        );
        assert_eq!(
            stats.min_temperature_c,
            sample.iter().map(|f| f.temperature_c).min().unwrap()
        );

        let precipitation: f64 = sample.iter().map(|f| f.precipitation).sum();
        assert!((stats.total_precipitation - precipitation).abs() < 0.01);
        assert!((30.0..=100.0).contains(&stats.average_humidity));
        assert!((0.0..=50.0).contains(&stats.average_wind_speed));
    }

    #[test]
    fn test_statistics_known_values() {
        let date = Utc::now();
        let record = |temperature_c: i32, humidity: u8, precipitation: f64, wind_speed: f64| {
            WeatherForecast {
                date,
                temperature_c,
                temperature_f: celsius_to_fahrenheit(temperature_c),
                summary: "Mild".to_string(),
                humidity,
                wind_speed,
                wind_direction: WindDirection::N,
                precipitation,
                pressure: 1013,
            }
        };
        let sample = vec![
            record(10, 40, 1.25, 10.0),
            record(20, 50, 2.5, 20.0),
            record(-5, 61, 0.0, 5.5),
        ];

        let stats = compute_statistics(&sample, 3);
        assert_eq!(stats.average_temperature_c, 8.33);
        assert_eq!(stats.max_temperature_c, 20);
        assert_eq!(stats.min_temperature_c, -5);
        assert_eq!(stats.average_humidity, 50.33);
        assert_eq!(stats.total_precipitation, 3.75);
        assert_eq!(stats.average_wind_speed, 11.83);
        assert_eq!(stats.days_analyzed, 3);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.235001, 2), 1.24);
        assert_eq!(round_to(6.55, 0), 7.0);
        assert_eq!(round_to(4.04, 1), 4.0);
    }
}
