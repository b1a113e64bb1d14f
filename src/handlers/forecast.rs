//! Forecast endpoint handlers.

use crate::{
    handlers::record_generated,
    models::{
        CityQuery, DEFAULT_FORECAST_DAYS, DaysQuery, DetailedForecastQuery,
        DetailedWeatherForecast, WeatherForecast, WeatherForecastRequest,
    },
    services::{RecordKind, WeatherForecastService, forecast::parse_forecast_date},
};
use actix_web::{Error, HttpRequest, Result, web};
use chrono::Utc;
use paperclip::actix::api_v2_operation;

/// Multi-day forecast
#[api_v2_operation(
    summary = "Get weather forecast",
    description = "Get weather forecast for the specified number of days (1-30, default 5). Returns 400 when days is out of range.",
    tags("Weather Forecast")
)]
pub async fn get_forecast(
    req: HttpRequest,
    query: web::Query<DaysQuery>,
) -> Result<web::Json<Vec<WeatherForecast>>, Error> {
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let forecasts = WeatherForecastService::new().get_forecast(days)?;

    record_generated(&req, RecordKind::Basic, forecasts.len());
    Ok(web::Json(forecasts))
}

/// Current conditions
///
/// The city is accepted for logging only and does not change the output.
#[api_v2_operation(
    summary = "Get current weather",
    description = "Get current weather conditions for a specific city or default location.",
    tags("Weather Forecast")
)]
pub async fn get_current_weather(
    req: HttpRequest,
    query: web::Query<CityQuery>,
) -> Result<web::Json<WeatherForecast>, Error> {
    let forecast = WeatherForecastService::new().get_current_weather(query.city.as_deref());

    record_generated(&req, RecordKind::Basic, 1);
    Ok(web::Json(forecast))
}

#[api_v2_operation(
    summary = "Get forecast by city",
    description = "Get weather forecast for a specific city. Returns 400 when the city is blank or days is outside 1-30.",
    tags("Weather Forecast")
)]
pub async fn get_forecast_by_city(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<DaysQuery>,
) -> Result<web::Json<Vec<WeatherForecast>>, Error> {
    let city = path.into_inner();
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let forecasts = WeatherForecastService::new().get_forecast_by_city(&city, days)?;

    record_generated(&req, RecordKind::Basic, forecasts.len());
    Ok(web::Json(forecasts))
}

/// Detailed forecast for one date
///
/// The date must not be earlier than the moment the request is handled.
#[api_v2_operation(
    summary = "Get detailed forecast",
    description = "Get detailed weather forecast for a specific date (ISO 8601, e.g. 2030-01-01T12:00:00Z). Includes cloud cover, UV index, visibility, and any active alerts. Returns 400 for past or unparseable dates.",
    tags("Detailed Forecast")
)]
pub async fn get_detailed_forecast(
    req: HttpRequest,
    query: web::Query<DetailedForecastQuery>,
) -> Result<web::Json<DetailedWeatherForecast>, Error> {
    let date = parse_forecast_date(&query.date)?;
    let forecast = WeatherForecastService::new().get_detailed_forecast(
        date,
        query.city.as_deref(),
        Utc::now(),
    )?;

    record_generated(&req, RecordKind::Detailed, 1);
    Ok(web::Json(forecast))
}

#[api_v2_operation(
    summary = "Get detailed forecasts",
    description = "Get detailed weather forecasts for multiple days (1-30, default 5).",
    tags("Detailed Forecast")
)]
pub async fn get_detailed_forecasts(
    req: HttpRequest,
    query: web::Query<DaysQuery>,
) -> Result<web::Json<Vec<DetailedWeatherForecast>>, Error> {
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let forecasts = WeatherForecastService::new().get_detailed_forecasts(days)?;

    record_generated(&req, RecordKind::Detailed, forecasts.len());
    Ok(web::Json(forecasts))
}

/// Custom forecast request
///
/// A non-blank `city` routes to the city forecast, otherwise the plain
/// multi-day forecast is returned.
#[api_v2_operation(
    summary = "Create custom forecast request",
    description = "Create a custom weather forecast request with optional city and days (1-30, default 5) parameters.",
    tags("Weather Forecast")
)]
pub async fn create_forecast_request(
    req: HttpRequest,
    body: web::Json<WeatherForecastRequest>,
) -> Result<web::Json<Vec<WeatherForecast>>, Error> {
    let forecasts = WeatherForecastService::new().create_forecast_request(&body)?;

    record_generated(&req, RecordKind::Basic, forecasts.len());
    Ok(web::Json(forecasts))
}
