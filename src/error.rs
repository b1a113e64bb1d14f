//! Client-facing error type.
//!
//! Every failure this service can produce is a rejected request, so all
//! variants render as `400 Bad Request` with a `{"detail": "..."}` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// Errors raised while validating a request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Days must be between {min} and {max}")]
    InvalidDays { min: u32, max: u32 },

    #[error("City name cannot be empty")]
    EmptyCity,

    #[error("Date cannot be in the past")]
    PastDate,

    #[error("Invalid date '{0}': expected ISO 8601 format (YYYY-MM-DDTHH:MM:SS)")]
    InvalidDate(String),

    /// Malformed query string, path segment, or JSON body
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}
