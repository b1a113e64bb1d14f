//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Route label for metrics
///
/// Uses the matched resource pattern (e.g. `/api/forecast/city/{city}`) so
/// path parameters do not explode label cardinality. Unmatched paths share a
/// single `/unknown` label.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| "/unknown".to_string())
}
