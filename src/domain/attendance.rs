//! Attendance status literals and aggregate statistics.

use serde::Serialize;
use utoipa::ToSchema;

use super::Reservation;

/// Attendance value meaning "attending".
pub const HADIR: &str = "hadir";

/// Attendance value meaning "not attending".
pub const TIDAK_HADIR: &str = "tidak hadir";

/// Attendance value meaning "unsure".
pub const RAGU: &str = "ragu";

/// Aggregate attendance counts over the stored reservations.
///
/// `total` counts every record; the three buckets count records whose
/// `attendance` string exactly equals the corresponding literal. A record
/// with any other value contributes to `total` only, so the buckets do
/// not necessarily sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AttendanceStats {
    /// Number of stored reservations.
    pub total: usize,
    /// Records with `attendance == "hadir"`.
    pub hadir: usize,
    /// Records with `attendance == "tidak hadir"`.
    #[serde(rename = "tidakHadir")]
    pub tidak_hadir: usize,
    /// Records with `attendance == "ragu"`.
    pub ragu: usize,
}

impl AttendanceStats {
    /// Tallies statistics over a slice of reservations.
    #[must_use]
    pub fn tally(reservations: &[Reservation]) -> Self {
        let mut stats = Self {
            total: reservations.len(),
            ..Self::default()
        };
        for r in reservations {
            match r.attendance.as_str() {
                HADIR => stats.hadir += 1,
                TIDAK_HADIR => stats.tidak_hadir += 1,
                RAGU => stats.ragu += 1,
                _ => {}
            }
        }
        stats
    }
}
