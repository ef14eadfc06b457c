//! Data Transfer Objects for REST request/response serialization.

pub mod reservation_dto;

pub use reservation_dto::*;
