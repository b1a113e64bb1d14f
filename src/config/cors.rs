//! Cross-origin resource sharing configuration.

use actix_cors::Cors;
use std::env;

/// CORS policy for the public API
///
/// The API has no authentication boundary, so every origin, method, and
/// header is allowed unless `CORS_ALLOWED_ORIGINS` narrows the origins.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// `None` allows any origin
    pub allowed_origins: Option<Vec<String>>,
    pub max_age_seconds: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: None,
            max_age_seconds: 3600,
        }
    }
}

impl CorsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .and_then(|v| parse_origins(&v));

        let max_age_seconds = env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            allowed_origins,
            max_age_seconds,
        }
    }

    /// Build the actix CORS middleware for this policy
    pub fn to_cors(&self) -> Cors {
        let cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(self.max_age_seconds);

        match &self.allowed_origins {
            None => cors.allow_any_origin().send_wildcard(),
            Some(origins) => origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        }
    }
}

/// Split a comma separated origin list; `*` or an empty list means any origin
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        None
    } else {
        Some(origins)
    }
}
