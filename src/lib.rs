//! # rsvp-gateway
//!
//! REST API for collecting event RSVP submissions. Guests submit a name,
//! an optional message, and an attendance status; the service persists
//! submissions in a single JSON-array file and exposes aggregate
//! statistics and attendee listings.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ReservationService (service/)
//!     │
//!     ├── Reservation / AttendanceStats (domain/)
//!     │
//!     └── ReservationStore — JSON file (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
