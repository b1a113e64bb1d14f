//! Weather statistics endpoint handler.

use crate::{
    handlers::record_generated,
    models::{DEFAULT_STATISTICS_DAYS, DaysQuery, WeatherStatistics},
    services::{RecordKind, WeatherForecastService},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Aggregate statistics over a generated sample of `days` forecasts
#[api_v2_operation(
    summary = "Get weather statistics",
    description = "Get average, maximum, and minimum temperature, average humidity, total precipitation, and average wind speed over a period of 1-365 days (default 7).",
    tags("Statistics")
)]
pub async fn get_weather_statistics(
    req: HttpRequest,
    query: web::Query<DaysQuery>,
) -> Result<web::Json<WeatherStatistics>, Error> {
    let days = query.days.unwrap_or(DEFAULT_STATISTICS_DAYS);
    let statistics = WeatherForecastService::new().get_weather_statistics(days)?;

    record_generated(&req, RecordKind::Basic, statistics.days_analyzed as usize);
    Ok(web::Json(statistics))
}
