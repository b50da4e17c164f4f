//! Attendance record model.

use serde::{Deserialize, Serialize};

/// The time fields of an attendance record, as returned by the external
/// data service.
///
/// Clock times are stored as `HH:MM` strings and any field may be null
/// (an open record with no check-out, a row entered by hand, etc.). The
/// hours derivation degrades to `None` when the inputs are insufficient;
/// see [`crate::derivation::hours_worked`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Check-in clock time (`HH:MM`).
    pub check_in: Option<String>,
    /// Check-out clock time (`HH:MM`).
    pub check_out: Option<String>,
    /// Unpaid break duration in minutes.
    pub break_minutes: Option<i64>,
}
