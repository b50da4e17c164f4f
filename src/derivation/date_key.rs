//! Date-key normalization.
//!
//! The external data service returns dates in several shapes: bare
//! `YYYY-MM-DD` strings, ISO-8601 timestamps with a time suffix, or null.
//! This module reduces all of them to a single comparable calendar-day key
//! so that range checks are centralized rather than scattered string slices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A comparable `YYYY-MM-DD` calendar-day key.
///
/// A `DateKey` carries no time-of-day or timezone information. Ordering is
/// calendar ordering, which for the `YYYY-MM-DD` rendering coincides with
/// lexicographic string ordering. No timezone conversion is performed when
/// parsing; callers must supply values already in the comparison timezone.
///
/// # Example
///
/// ```
/// use portal_engine::derivation::DateKey;
///
/// let from_date = DateKey::parse("2024-06-01").unwrap();
/// let from_timestamp = DateKey::parse("2024-06-01T15:30:00Z").unwrap();
/// assert_eq!(from_date, from_timestamp);
/// assert_eq!(from_date.to_string(), "2024-06-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parses a date or timestamp string into a date key.
    ///
    /// Takes the first 10 characters of the trimmed input and parses them as
    /// `YYYY-MM-DD`. Returns `None` for empty, short, or unparseable input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let prefix = trimmed.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok().map(Self)
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Normalizes an optional date/timestamp string into a date key.
///
/// Returns `None` when the input is null, empty, or unparseable.
///
/// # Example
///
/// ```
/// use portal_engine::derivation::normalize;
///
/// assert!(normalize(None).is_none());
/// assert!(normalize(Some("")).is_none());
/// assert!(normalize(Some("not a date")).is_none());
/// assert!(normalize(Some("2024-06-01T00:00:00Z")).is_some());
/// ```
pub fn normalize(value: Option<&str>) -> Option<DateKey> {
    value.and_then(DateKey::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// DK-001: bare date string
    #[test]
    fn test_parse_bare_date() {
        let key = DateKey::parse("2024-06-01").unwrap();
        assert_eq!(key.date(), make_date("2024-06-01"));
    }

    /// DK-002: timestamp with time suffix
    #[test]
    fn test_parse_timestamp_keeps_date_part() {
        let key = DateKey::parse("2024-06-01T23:59:59.123Z").unwrap();
        assert_eq!(key.to_string(), "2024-06-01");
    }

    /// DK-003: unparseable input
    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DateKey::parse("not a date!").is_none());
        assert!(DateKey::parse("2024/06/01").is_none());
        assert!(DateKey::parse("06-01-2024").is_none());
    }

    /// DK-004: short and empty input
    #[test]
    fn test_parse_rejects_short_input() {
        assert!(DateKey::parse("").is_none());
        assert!(DateKey::parse("2024-06").is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let key = DateKey::parse("  2024-06-01  ").unwrap();
        assert_eq!(key.to_string(), "2024-06-01");
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_date() {
        assert!(DateKey::parse("2024-02-30").is_none());
        assert!(DateKey::parse("2024-13-01").is_none());
    }

    #[test]
    fn test_ordering_matches_calendar_order() {
        let earlier = DateKey::parse("2024-05-31").unwrap();
        let later = DateKey::parse("2024-06-01").unwrap();
        assert!(earlier < later);
        assert!(later <= DateKey::parse("2024-06-01").unwrap());
    }

    #[test]
    fn test_normalize_none_and_empty() {
        assert!(normalize(None).is_none());
        assert!(normalize(Some("")).is_none());
        assert!(normalize(Some("   ")).is_none());
    }

    #[test]
    fn test_from_naive_date() {
        let key: DateKey = make_date("2024-06-01").into();
        assert_eq!(key, DateKey::parse("2024-06-01").unwrap());
    }

    #[test]
    fn test_serialization_round_trip() {
        let key = DateKey::parse("2024-06-01").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-06-01\"");
        let deserialized: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
