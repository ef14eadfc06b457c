//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ReservationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reservation service for all business logic.
    pub reservation_service: Arc<ReservationService>,
}
