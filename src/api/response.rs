//! Response types for the portal derivation engine API.
//!
//! This module defines the success payloads for the batch derivation
//! endpoints plus the error response structures and error handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CertificateStatus, EffectiveStatus};

/// Response body for the `/status/resolve` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// One result per employee, in request order.
    pub results: Vec<StatusResult>,
}

/// The resolved status for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResult {
    /// The employee id from the request.
    pub employee_id: String,
    /// The derived effective status.
    pub status: EffectiveStatus,
    /// The configured display label for the status.
    pub label: String,
}

/// Response body for the `/certificates/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateResponse {
    /// One result per employee, in request order.
    pub results: Vec<CertificateResult>,
}

/// The certificate evaluation for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateResult {
    /// The employee id from the request.
    pub employee_id: String,
    /// The derived certificate status.
    pub status: CertificateStatus,
    /// The computed expiry date, when a certificate is on file.
    pub expiry: Option<NaiveDate>,
    /// The configured display label for the status.
    pub label: String,
    /// The id of the document that was evaluated (the latest medical
    /// certificate), when one exists.
    pub document_id: Option<String>,
}

/// Response body for the `/attendance/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursResponse {
    /// One result per attendance record, in request order.
    pub results: Vec<HoursResult>,
}

/// The derived hours for one attendance record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursResult {
    /// The record id from the request.
    pub record_id: String,
    /// Worked hours, or null when the record's times are insufficient.
    pub hours: Option<Decimal>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
