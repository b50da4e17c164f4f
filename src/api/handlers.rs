//! HTTP request handlers for the portal derivation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PortalConfig;
use crate::derivation::{evaluate_certificate, hours_worked, latest_certificate, resolve_status};
use crate::models::DocumentRecord;

use super::request::{
    CertificateRequest, EmployeeDocumentsEntry, EmployeeStatusEntry, HoursRequest, StatusRequest,
};
use super::response::{
    ApiError, CertificateResponse, CertificateResult, HoursResponse, HoursResult, StatusResponse,
    StatusResult,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status/resolve", post(resolve_status_handler))
        .route("/certificates/evaluate", post(evaluate_certificates_handler))
        .route("/attendance/hours", post(attendance_hours_handler))
        .with_state(state)
}

/// Handler for POST /status/resolve.
///
/// Resolves the effective status for a batch of employee records against a
/// single `today` value.
async fn resolve_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    info!(
        correlation_id = %correlation_id,
        today = %request.today,
        employees = request.employees.len(),
        "Resolving effective statuses"
    );

    let config = state.config().config();
    let results = resolve_batch(config, request.today, request.employees);

    json_ok(Json(StatusResponse { results }))
}

/// Handler for POST /certificates/evaluate.
///
/// Filters each employee's documents down to the configured
/// medical-certificate types, selects the latest, and evaluates its
/// validity against a single reference date.
async fn evaluate_certificates_handler(
    State(state): State<AppState>,
    payload: Result<Json<CertificateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    info!(
        correlation_id = %correlation_id,
        reference_date = %request.reference_date,
        employees = request.employees.len(),
        "Evaluating medical certificates"
    );

    let config = state.config().config();
    let results = evaluate_batch(config, request.reference_date, request.employees);

    json_ok(Json(CertificateResponse { results }))
}

/// Handler for POST /attendance/hours.
///
/// Computes worked hours for a batch of attendance records.
async fn attendance_hours_handler(
    State(_state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        "Computing attendance hours"
    );

    let results = request
        .records
        .into_iter()
        .map(|entry| {
            let (record_id, record) = entry.into_parts();
            let hours = hours_worked(
                record.check_in.as_deref(),
                record.check_out.as_deref(),
                record.break_minutes,
            );
            HoursResult { record_id, hours }
        })
        .collect();

    json_ok(Json(HoursResponse { results }))
}

/// Resolves effective statuses for a batch of employees with one `today`.
fn resolve_batch(
    config: &PortalConfig,
    today: chrono::NaiveDate,
    employees: Vec<EmployeeStatusEntry>,
) -> Vec<StatusResult> {
    employees
        .into_iter()
        .map(|entry| {
            let (employee_id, record) = entry.into_parts();
            let status = resolve_status(&record, today);
            StatusResult {
                employee_id,
                status,
                label: config.status_label(status).to_string(),
            }
        })
        .collect()
}

/// Evaluates the latest medical certificate for a batch of employees.
fn evaluate_batch(
    config: &PortalConfig,
    reference_date: chrono::NaiveDate,
    employees: Vec<EmployeeDocumentsEntry>,
) -> Vec<CertificateResult> {
    employees
        .into_iter()
        .map(|entry| {
            let certificates: Vec<DocumentRecord> = entry
                .documents
                .into_iter()
                .filter(|doc| config.is_medical_certificate(&doc.document_type))
                .map(Into::into)
                .collect();

            let latest = latest_certificate(&certificates);
            let evaluation = evaluate_certificate(
                latest.and_then(|doc| doc.uploaded_at.as_deref()),
                reference_date,
            );

            CertificateResult {
                employee_id: entry.id,
                label: config.certificate_label(evaluation.status).to_string(),
                status: evaluation.status,
                expiry: evaluation.expiry,
                document_id: latest.map(|doc| doc.id.clone()),
            }
        })
        .collect()
}

/// Maps a JSON extraction rejection to a structured API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn json_ok<T: serde::Serialize>(body: Json<T>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
