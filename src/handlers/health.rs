//! Health check endpoint handler.

use crate::models::HealthCheck;
use actix_web::{Error, Result, web};
use chrono::Utc;
use paperclip::actix::api_v2_operation;

pub const SERVICE_NAME: &str = "Weather Forecast API";

/// Health check endpoint
///
/// Always succeeds; suitable for load balancer and liveness probes.
#[api_v2_operation(
    summary = "Health check",
    description = "Check API health status.",
    tags("Health")
)]
pub async fn health() -> Result<web::Json<HealthCheck>, Error> {
    Ok(web::Json(HealthCheck {
        status: "Healthy".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
    }))
}
