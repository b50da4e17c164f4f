//! HTTP API module for the portal derivation engine.
//!
//! This module provides the REST endpoints the portal backend calls to
//! derive effective statuses, certificate validity, and attendance hours
//! for batches of records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CertificateRequest, HoursRequest, StatusRequest};
pub use response::ApiError;
pub use state::AppState;
