//! Weather alerts endpoint handler.

use crate::{
    handlers::record_generated,
    models::{CityQuery, WeatherAlert},
    services::{RecordKind, WeatherForecastService},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Active weather alerts
///
/// Returns between zero and four alerts; the batch size is random.
#[api_v2_operation(
    summary = "Get weather alerts",
    description = "Get active weather alerts for a specific area. Each alert carries a type, severity level, description, and start and end times.",
    tags("Weather Alerts")
)]
pub async fn get_weather_alerts(
    req: HttpRequest,
    query: web::Query<CityQuery>,
) -> Result<web::Json<Vec<WeatherAlert>>, Error> {
    let alerts = WeatherForecastService::new().get_weather_alerts(query.city.as_deref());

    tracing::debug!(count = alerts.len(), city = ?query.city, "Generated weather alerts");
    record_generated(&req, RecordKind::Alert, alerts.len());
    Ok(web::Json(alerts))
}
