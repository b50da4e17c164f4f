//! Pure derivation logic for the portal.
//!
//! This module contains the stateless computations behind the portal's
//! employee views: date-key normalization, effective-status resolution,
//! medical-certificate expiry evaluation, and attendance-hours calculation.
//! Every function here is total, synchronous, and free of I/O; the reference
//! date (`today`) is always an explicit parameter so that evaluating a batch
//! of records uses one consistent instant.

mod certificate;
mod date_key;
mod hours;
mod status;

pub use certificate::{evaluate_certificate, expiry_of, latest_certificate};
pub use date_key::{DateKey, normalize};
pub use hours::hours_worked;
pub use status::resolve_status;
