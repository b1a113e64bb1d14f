//! Weather Forecast API - synthetic weather data over HTTP
//!
//! An Actix Web and Paperclip service returning randomly generated weather
//! forecasts, detailed forecasts, alerts, and aggregate statistics. All
//! values fall within documented bounds; there is no external data source
//! and no state beyond Prometheus counters.
//!
//! ## Architecture
//!
//! - `models/` - Weather records and request/response models
//! - `services/` - Generator, request validation, and metrics
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request ID and metrics middleware
//! - `config/` - Environment-driven configuration
//! - `error` - Client error type rendered as `{"detail": ...}`
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::web;
//! use weather_forecast_api::{AppConfig, AppMetrics, create_app_with};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let metrics = web::Data::new(AppMetrics::new().map_err(std::io::Error::other)?);
//!     actix_web::HttpServer::new(move || {
//!         create_app_with(AppConfig::default(), Some(metrics.clone()))
//!     })
//!         .bind(("127.0.0.1", 8080))?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{AppConfig, CorsConfig, MetricsConfig, ServerConfig};
pub use error::ApiError;
pub use handlers::{
    create_app_with, create_base_app, create_forecast_request, create_openapi_spec, docs,
    get_current_weather, get_detailed_forecast, get_detailed_forecasts, get_forecast,
    get_forecast_by_city, get_metrics, get_weather_alerts, get_weather_statistics, health, root,
    version,
};
pub use middleware::{RequestId, RequestIdMiddleware, track_http_metrics};
pub use models::{
    AlertType, DetailedWeatherForecast, HealthCheck, RootResponse, Severity, VersionResponse,
    WeatherAlert, WeatherForecast, WeatherForecastRequest, WeatherStatistics, WindDirection,
};
pub use services::{AppMetrics, ForecastGenerator, RecordKind, WeatherForecastService};
