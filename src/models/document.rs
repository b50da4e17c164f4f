//! Employee document model and certificate evaluation types.
//!
//! This module defines the document record shape read from the external
//! data service and the derived medical-certificate evaluation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validity of an employee's medical certificate relative to a reference
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    /// A certificate is on file and its expiry date has not passed.
    Valid,
    /// A certificate is on file but its expiry date is before the reference
    /// date.
    Expired,
    /// No certificate is on file (or its upload timestamp is unparseable).
    Missing,
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertificateStatus::Valid => write!(f, "valid"),
            CertificateStatus::Expired => write!(f, "expired"),
            CertificateStatus::Missing => write!(f, "missing"),
        }
    }
}

/// The result of evaluating an employee's medical certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateEvaluation {
    /// The tri-state certificate status.
    pub status: CertificateStatus,
    /// The computed expiry date (upload date plus one calendar year), when a
    /// certificate is on file.
    pub expiry: Option<NaiveDate>,
}

/// An employee document record as returned by the external data service.
///
/// Only the upload timestamp matters for certificate evaluation; the
/// document type is used to filter rows down to medical certificates before
/// selecting the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique identifier for the document (also the deterministic tie-break
    /// when upload timestamps are equal).
    pub id: String,
    /// The stored document-type value, e.g. `"medical_certificate"`.
    pub document_type: String,
    /// Upload timestamp in ISO-8601 form; may be null for legacy rows.
    pub uploaded_at: Option<String>,
}
