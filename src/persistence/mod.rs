//! Persistence layer: file-backed JSON-array reservation store.
//!
//! Provides [`ReservationStore`], the durable record list behind the
//! service. The backing file holds one pretty-printed JSON array of
//! reservation objects.

pub mod file_store;

pub use file_store::ReservationStore;
