//! Medical-certificate expiry and status evaluation.
//!
//! A medical certificate is valid for one calendar year from its upload
//! timestamp. Only the single most recently uploaded certificate per
//! employee matters; this module provides both the evaluation and a
//! deterministic latest-document selection helper.

use chrono::{Datelike, NaiveDate};

use crate::models::{CertificateEvaluation, CertificateStatus, DocumentRecord};

use super::date_key::normalize;

/// Computes the expiry date of a certificate uploaded at the given
/// timestamp.
///
/// The expiry is the upload date plus one calendar year (same month and
/// day). A certificate uploaded on Feb 29 expires on Mar 1 of the following
/// (non-leap) year. Returns `None` when the timestamp is null or
/// unparseable.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use portal_engine::derivation::expiry_of;
///
/// assert_eq!(expiry_of(None), None);
/// assert_eq!(
///     expiry_of(Some("2023-03-15T00:00:00Z")),
///     NaiveDate::from_ymd_opt(2024, 3, 15),
/// );
/// ```
pub fn expiry_of(uploaded_at: Option<&str>) -> Option<NaiveDate> {
    let uploaded = normalize(uploaded_at)?.date();
    let next_year = uploaded.year() + 1;
    uploaded
        .with_year(next_year)
        .or_else(|| NaiveDate::from_ymd_opt(next_year, 3, 1))
}

/// Evaluates the certificate status for the given upload timestamp.
///
/// - no parseable timestamp → [`CertificateStatus::Missing`]
/// - expiry strictly before `reference_date` → [`CertificateStatus::Expired`]
/// - otherwise → [`CertificateStatus::Valid`] (a certificate expiring on the
///   reference date itself is still valid)
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use portal_engine::derivation::evaluate_certificate;
/// use portal_engine::models::CertificateStatus;
///
/// let reference = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// let evaluation = evaluate_certificate(Some("2023-01-01"), reference);
/// assert_eq!(evaluation.status, CertificateStatus::Valid);
/// ```
pub fn evaluate_certificate(
    uploaded_at: Option<&str>,
    reference_date: NaiveDate,
) -> CertificateEvaluation {
    match expiry_of(uploaded_at) {
        None => CertificateEvaluation {
            status: CertificateStatus::Missing,
            expiry: None,
        },
        Some(expiry) if expiry < reference_date => CertificateEvaluation {
            status: CertificateStatus::Expired,
            expiry: Some(expiry),
        },
        Some(expiry) => CertificateEvaluation {
            status: CertificateStatus::Valid,
            expiry: Some(expiry),
        },
    }
}

/// Selects the most recently uploaded document from a pre-filtered slice.
///
/// Documents are compared by upload timestamp, with a missing timestamp
/// sorting below any present one; ties are broken by the maximum document
/// id so the selection is stable across calls given identical input.
/// Timestamps are compared as raw ISO-8601 strings, whose lexicographic
/// order matches chronological order.
pub fn latest_certificate(documents: &[DocumentRecord]) -> Option<&DocumentRecord> {
    documents.iter().max_by(|a, b| {
        (a.uploaded_at.as_deref(), a.id.as_str()).cmp(&(b.uploaded_at.as_deref(), b.id.as_str()))
    })
}
