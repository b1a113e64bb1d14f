//! Request metrics middleware.
//!
//! Written as a plain async function and mounted with
//! `actix_web::middleware::from_fn(track_http_metrics)`.

use crate::{config::MetricsConfig, services::AppMetrics, utils::route::extract_route_pattern};
use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};
use std::time::Instant;

/// Counts every request and times it, labelled by method, status, and route pattern
///
/// Does nothing unless `AppMetrics` is registered as app data. The scrape
/// route named by `MetricsConfig::path` is left out of the counters.
pub async fn track_http_metrics(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started = Instant::now();
    let method = req.method().clone();

    let res = next.call(req).await?;

    let request = res.request();
    if let Some(metrics) = request.app_data::<web::Data<AppMetrics>>() {
        let route = extract_route_pattern(request);
        let is_scrape = match request.app_data::<web::Data<MetricsConfig>>() {
            Some(config) => config.is_scrape_route(&route),
            None => MetricsConfig::default().is_scrape_route(&route),
        };
        if !is_scrape {
            metrics.observe_request(method.as_str(), &route, res.status(), started.elapsed());
        }
    }

    Ok(res)
}
