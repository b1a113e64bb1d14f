//! Metrics configuration.

use std::env;

/// Route serving the Prometheus scrape unless `METRICS_PATH` overrides it
pub const DEFAULT_METRICS_PATH: &str = "/api/metrics";

/// Whether metrics are exposed, and where
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route of the scrape endpoint; requests to it are not counted
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_METRICS_PATH.to_string(),
        }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .map(|v| parse_switch(&v))
            .unwrap_or(true);
        let path = env::var("METRICS_PATH")
            .ok()
            .and_then(|v| normalize_path(&v))
            .unwrap_or_else(|| DEFAULT_METRICS_PATH.to_string());

        Self { enabled, path }
    }

    /// True for the scrape route itself, which stays out of the request counters
    pub fn is_scrape_route(&self, route: &str) -> bool {
        route == self.path
    }
}

/// Only an explicit "off" value disables collection
fn parse_switch(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

fn normalize_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}
