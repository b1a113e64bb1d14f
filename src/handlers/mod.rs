//! HTTP request handlers for API endpoints.
//!
//! Handlers translate query, path, and body parameters into calls on the
//! forecast service and shape the results into JSON responses.

pub mod alerts;
pub mod forecast;
pub mod health;
pub mod metrics;
pub mod openapi;
pub mod root;
pub mod statistics;
pub mod version;

pub use alerts::*;
pub use forecast::*;
pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use root::*;
pub use statistics::*;
pub use version::*;

use crate::services::{AppMetrics, RecordKind};
use actix_web::{HttpRequest, web};

/// Count generated records when metrics are registered for the app
pub(crate) fn record_generated(req: &HttpRequest, kind: RecordKind, count: usize) {
    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.record_generated(kind, count);
    }
}
