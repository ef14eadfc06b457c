//! Reservation service: validation and orchestration over the store.

use std::sync::Arc;

use crate::domain::{AttendanceStats, Reservation, attendance};
use crate::error::RsvpError;
use crate::persistence::ReservationStore;

/// Orchestration layer for all reservation operations.
///
/// Stateless coordinator over an injected [`ReservationStore`]. Every
/// operation is a single read or read-modify-write cycle against the
/// store; there are no intermediate states.
#[derive(Debug, Clone)]
pub struct ReservationService {
    store: Arc<ReservationStore>,
}

impl ReservationService {
    /// Creates a new `ReservationService` over the given store.
    #[must_use]
    pub fn new(store: Arc<ReservationStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`ReservationStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<ReservationStore> {
        &self.store
    }

    /// Returns the full reservation list in insertion order. No
    /// pagination, no filtering.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreRead`] if the store cannot be read.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, RsvpError> {
        self.store.load_all().await
    }

    /// Validates input, stamps a timestamp, and persists a new record.
    ///
    /// `name` and `attendance` must be non-empty; a missing `message`
    /// is coerced to the empty string. The attendance value is stored
    /// as-is with no whitelist check.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::Validation`] when a required field is empty
    /// and [`RsvpError::StoreWrite`] when persistence fails.
    pub async fn create_reservation(
        &self,
        name: String,
        message: Option<String>,
        attendance: String,
    ) -> Result<Reservation, RsvpError> {
        if name.is_empty() || attendance.is_empty() {
            return Err(RsvpError::Validation(
                "Name and attendance are required".to_string(),
            ));
        }

        let record = Reservation::new(name, message.unwrap_or_default(), attendance);
        self.store.append(record.clone()).await?;
        tracing::info!(timestamp = %record.timestamp, attendance = %record.attendance, "reservation created");
        Ok(record)
    }

    /// Tallies attendance statistics over all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreRead`] if the store cannot be read.
    pub async fn stats(&self) -> Result<AttendanceStats, RsvpError> {
        let records = self.store.load_all().await?;
        Ok(AttendanceStats::tally(&records))
    }

    /// Returns the records whose attendance is `"hadir"`, in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreRead`] if the store cannot be read.
    pub async fn attendees(&self) -> Result<Vec<Reservation>, RsvpError> {
        let mut records = self.store.load_all().await?;
        records.retain(|r| r.attendance == attendance::HADIR);
        Ok(records)
    }

    /// Deletes all records carrying the given timestamp. Matching
    /// nothing still succeeds, so deletion is idempotent from the
    /// caller's view.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreWrite`] if the store cannot be
    /// rewritten.
    pub async fn delete_reservation(&self, timestamp: &str) -> Result<(), RsvpError> {
        let removed = self.store.remove_by_timestamp(timestamp).await?;
        tracing::info!(timestamp, removed, "reservation delete processed");
        Ok(())
    }
}
