//! Reservation record: one RSVP submission.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One RSVP submission as stored on disk and served over the wire.
///
/// Records are immutable after creation: they are only ever appended to
/// the store or removed from it, never updated in place. The `timestamp`
/// doubles as the record's identifier for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    /// Guest name (non-empty; enforced at the service boundary).
    pub name: String,

    /// Optional free-text message. Empty string when the guest left none.
    pub message: String,

    /// Attendance status string. The recognized values are `"hadir"`,
    /// `"tidak hadir"` and `"ragu"`, but any non-empty string is stored
    /// as-is; unrecognized values simply fall outside every stats bucket.
    pub attendance: String,

    /// ISO-8601 UTC creation timestamp with millisecond precision
    /// (e.g. `2026-08-07T09:41:23.517Z`). Assigned server-side at
    /// insertion and used as the record's de facto identifier.
    pub timestamp: String,
}

impl Reservation {
    /// Builds a new record, stamping the current UTC time.
    ///
    /// Timestamp uniqueness is assumed rather than enforced; two
    /// creations within the same millisecond would collide.
    #[must_use]
    pub fn new(name: String, message: String, attendance: String) -> Self {
        Self {
            name,
            message,
            attendance,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn new_stamps_parseable_utc_timestamp() {
        let r = Reservation::new("Ana".to_string(), String::new(), "hadir".to_string());
        assert!(r.timestamp.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&r.timestamp);
        assert!(parsed.is_ok());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let r = Reservation {
            name: "Ana".to_string(),
            message: "see you there".to_string(),
            attendance: "hadir".to_string(),
            timestamp: "2026-08-07T09:41:23.517Z".to_string(),
        };
        let Ok(json) = serde_json::to_value(&r) else {
            panic!("serialization failed");
        };
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["message"], "see you there");
        assert_eq!(json["attendance"], "hadir");
        assert_eq!(json["timestamp"], "2026-08-07T09:41:23.517Z");
    }
}
