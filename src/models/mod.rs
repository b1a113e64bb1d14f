//! Data models and schemas for the Weather Forecast API.
//!
//! This module contains the weather records produced by the generator and
//! the request/response shapes of the HTTP endpoints.

pub mod api;
pub mod forecast;

pub use api::*;
pub use forecast::*;
