//! Reservation DTOs for create and delete operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/reservations`.
///
/// Every field is defaulted so that absent fields reach the service
/// layer as empty values and fail validation there with a 400 rather
/// than being rejected by the deserializer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// Guest name. Required; empty or absent fails validation.
    #[serde(default)]
    pub name: String,
    /// Optional free-text message.
    #[serde(default)]
    pub message: Option<String>,
    /// Attendance status string. Required; empty or absent fails
    /// validation. Not checked against a whitelist.
    #[serde(default)]
    pub attendance: String,
}

/// Confirmation body for `DELETE /api/reservations/{timestamp}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteReservationResponse {
    /// Human-readable confirmation message.
    pub message: String,
}
