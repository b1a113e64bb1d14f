//! Configuration structures and loading utilities.
//!
//! Each concern has its own structure with defaults and an environment
//! variable loader. `AppConfig` bundles the ones the app factory needs.

pub mod cors;
pub mod metrics;
pub mod server;

pub use cors::*;
pub use metrics::*;
pub use server::*;

/// Settings consumed when building the Actix application
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

impl AppConfig {
    /// Load every application setting from the environment
    pub fn from_env() -> Self {
        Self {
            cors: CorsConfig::from_env(),
            metrics: MetricsConfig::from_env(),
        }
    }
}
