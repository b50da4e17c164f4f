//! Request types for the portal derivation engine API.
//!
//! This module defines the JSON request structures for the batch derivation
//! endpoints. Each request carries one explicit reference date so every
//! record in the batch is evaluated against the same instant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, DocumentRecord, EmployeeStatusRecord};

/// Request body for the `/status/resolve` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The day to evaluate every employee against.
    pub today: NaiveDate,
    /// The employee records to resolve.
    pub employees: Vec<EmployeeStatusEntry>,
}

/// One employee's status fields in a `/status/resolve` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeStatusEntry {
    /// Unique identifier for the employee, echoed back in the response.
    pub id: String,
    /// The stored status value.
    #[serde(default)]
    pub status: Option<String>,
    /// First day of the vacation window.
    #[serde(default)]
    pub vacation_start: Option<String>,
    /// Last day of the vacation window, inclusive.
    #[serde(default)]
    pub vacation_end: Option<String>,
}

impl EmployeeStatusEntry {
    /// Splits the entry into the employee id and the domain record.
    pub fn into_parts(self) -> (String, EmployeeStatusRecord) {
        (
            self.id,
            EmployeeStatusRecord {
                status: self.status,
                vacation_start: self.vacation_start,
                vacation_end: self.vacation_end,
            },
        )
    }
}

/// Request body for the `/certificates/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRequest {
    /// The day to evaluate every certificate against.
    pub reference_date: NaiveDate,
    /// The employees and their document rows.
    pub employees: Vec<EmployeeDocumentsEntry>,
}

/// One employee's document rows in a `/certificates/evaluate` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDocumentsEntry {
    /// Unique identifier for the employee, echoed back in the response.
    pub id: String,
    /// The employee's document rows, of any document type. The handler
    /// filters them down to the configured medical-certificate types.
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// Document information in a `/certificates/evaluate` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Unique identifier for the document.
    pub id: String,
    /// The stored document-type value.
    pub document_type: String,
    /// Upload timestamp in ISO-8601 form.
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

impl From<DocumentEntry> for DocumentRecord {
    fn from(entry: DocumentEntry) -> Self {
        DocumentRecord {
            id: entry.id,
            document_type: entry.document_type,
            uploaded_at: entry.uploaded_at,
        }
    }
}

/// Request body for the `/attendance/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// The attendance records to compute hours for.
    pub records: Vec<AttendanceEntry>,
}

/// One attendance record in an `/attendance/hours` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Unique identifier for the record, echoed back in the response.
    pub id: String,
    /// Check-in clock time (`HH:MM`).
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out clock time (`HH:MM`).
    #[serde(default)]
    pub check_out: Option<String>,
    /// Unpaid break duration in minutes.
    #[serde(default)]
    pub break_minutes: Option<i64>,
}

impl AttendanceEntry {
    /// Splits the entry into the record id and the domain record.
    pub fn into_parts(self) -> (String, AttendanceRecord) {
        (
            self.id,
            AttendanceRecord {
                check_in: self.check_in,
                check_out: self.check_out,
                break_minutes: self.break_minutes,
            },
        )
    }
}
