//! Service layer: validation and orchestration over persistence.

pub mod reservation_service;

pub use reservation_service::ReservationService;
