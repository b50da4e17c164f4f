//! Core data models for the portal derivation engine.
//!
//! This module contains the value shapes consumed and produced by the
//! derivations. None of them own persistence; they mirror records returned
//! by the external data service.

mod attendance;
mod document;
mod employee;

pub use attendance::AttendanceRecord;
pub use document::{CertificateEvaluation, CertificateStatus, DocumentRecord};
pub use employee::{EffectiveStatus, EmployeeStatusRecord};
