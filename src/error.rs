//! Service error types with HTTP status code mapping.
//!
//! [`RsvpError`] is the central error type for the service. Each variant
//! maps to an HTTP status code, and every error response carries the
//! same flat JSON body shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Flat JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "Name and attendance are required" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum RsvpError {
    /// Caller supplied missing or invalid required fields. Never
    /// mutates state.
    #[error("{0}")]
    Validation(String),

    /// The store file could not be read or parsed.
    #[error("Error reading reservations")]
    StoreRead(String),

    /// The store file could not be serialized or written.
    #[error("Error saving reservation")]
    StoreWrite(String),
}

impl RsvpError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::StoreRead(_) | Self::StoreWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Underlying failure detail, logged server-side but kept out of
    /// the wire response for store errors.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::StoreRead(msg) | Self::StoreWrite(msg) => msg,
        }
    }
}

impl IntoResponse for RsvpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(detail = self.detail(), "store operation failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
