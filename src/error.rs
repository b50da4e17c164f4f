//! Error types for the portal derivation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The derivation functions themselves are total and never fail; errors here
//! come from the ambient layers (configuration loading, request handling).

use thiserror::Error;

/// The main error type for the portal derivation engine.
///
/// # Example
///
/// ```
/// use portal_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/labels.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/labels.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
