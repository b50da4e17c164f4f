//! Employee status model and related types.
//!
//! This module defines the raw status fields read from an employee record
//! and the derived effective status used for display and filtering.

use serde::{Deserialize, Serialize};

/// The effective status of an employee, derived from the stored status and
/// an optional vacation window.
///
/// Exactly one value is produced per employee per evaluation; the resolver
/// is a total function with no error case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    /// Working normally. Also the fallback for null or unrecognized stored
    /// statuses.
    Active,
    /// On leave (sick leave, parental leave, etc.).
    OnLeave,
    /// On vacation, either stored explicitly or derived from the vacation
    /// date window.
    Vacation,
    /// No longer employed.
    Inactive,
}

impl std::fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectiveStatus::Active => write!(f, "active"),
            EffectiveStatus::OnLeave => write!(f, "on_leave"),
            EffectiveStatus::Vacation => write!(f, "vacation"),
            EffectiveStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// The status-related fields of an employee record, as returned by the
/// external data service.
///
/// All fields are optional: the data layer is loosely typed and any of them
/// may be null. The resolver handles every null combination; see
/// [`crate::derivation::resolve_status`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStatusRecord {
    /// The stored status value, e.g. `"active"` or `"vacation"`. Unrecognized
    /// values are treated as active.
    pub status: Option<String>,
    /// First day of the vacation window (`YYYY-MM-DD`, possibly with a time
    /// suffix).
    pub vacation_start: Option<String>,
    /// Last day of the vacation window, inclusive.
    pub vacation_end: Option<String>,
}
