//! Business logic and service layer modules.
//!
//! This module contains the synthetic weather generator, the forecast
//! service that validates requests before generating, and metrics
//! collection.

pub mod forecast;
pub mod generator;
pub mod metrics;

pub use forecast::*;
pub use generator::*;
pub use metrics::*;
