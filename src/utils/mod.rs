//! Utility functions and helper modules.

pub mod route;

pub use route::*;
