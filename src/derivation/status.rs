//! Effective-status resolution.
//!
//! An employee record stores a base status plus an optional vacation date
//! range. The portal never displays the stored status directly: it shows
//! the *effective* status, where an active employee inside their vacation
//! window is reported as on vacation.

use chrono::NaiveDate;

use crate::models::{EffectiveStatus, EmployeeStatusRecord};

use super::date_key::{DateKey, normalize};

/// The stored base status after parsing the raw string.
///
/// Unrecognized and null values fall through to `Active`; `terminated` is a
/// legacy synonym for `inactive` still present in older rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseStatus {
    Active,
    OnLeave,
    Vacation,
    Inactive,
}

fn parse_base_status(raw: Option<&str>) -> BaseStatus {
    let Some(raw) = raw else {
        return BaseStatus::Active;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "inactive" | "terminated" => BaseStatus::Inactive,
        "on_leave" => BaseStatus::OnLeave,
        "vacation" => BaseStatus::Vacation,
        _ => BaseStatus::Active,
    }
}

/// Resolves the effective status for an employee record on a given day.
///
/// Priority order, first match wins:
///
/// 1. stored status `inactive` (or the legacy `terminated`) → [`EffectiveStatus::Inactive`]
/// 2. stored status `on_leave` → [`EffectiveStatus::OnLeave`]
/// 3. stored status `vacation` → [`EffectiveStatus::Vacation`], independent of dates
/// 4. otherwise, if both vacation bounds are present and
///    `vacation_start <= today <= vacation_end` (inclusive on both ends) →
///    [`EffectiveStatus::Vacation`]
/// 5. otherwise → [`EffectiveStatus::Active`]
///
/// This is a total function: null or unrecognized stored statuses are
/// treated as active, and a one-sided vacation range (only a start or only
/// an end) never triggers the vacation override.
///
/// The same `today` should be reused across a batch of employees so that
/// every row is evaluated against the same instant.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use portal_engine::derivation::resolve_status;
/// use portal_engine::models::{EffectiveStatus, EmployeeStatusRecord};
///
/// let record = EmployeeStatusRecord {
///     status: Some("active".to_string()),
///     vacation_start: Some("2024-06-01".to_string()),
///     vacation_end: Some("2024-06-10".to_string()),
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(resolve_status(&record, today), EffectiveStatus::Vacation);
/// ```
pub fn resolve_status(record: &EmployeeStatusRecord, today: NaiveDate) -> EffectiveStatus {
    match parse_base_status(record.status.as_deref()) {
        BaseStatus::Inactive => EffectiveStatus::Inactive,
        BaseStatus::OnLeave => EffectiveStatus::OnLeave,
        BaseStatus::Vacation => EffectiveStatus::Vacation,
        BaseStatus::Active => {
            if in_vacation_window(record, today) {
                EffectiveStatus::Vacation
            } else {
                EffectiveStatus::Active
            }
        }
    }
}

/// Returns true when both vacation bounds are present and `today` falls
/// inside them, inclusive. An incomplete range is treated as no window.
fn in_vacation_window(record: &EmployeeStatusRecord, today: NaiveDate) -> bool {
    let (Some(start), Some(end)) = (
        normalize(record.vacation_start.as_deref()),
        normalize(record.vacation_end.as_deref()),
    ) else {
        return false;
    };
    let today = DateKey::from(today);
    start <= today && today <= end
}
