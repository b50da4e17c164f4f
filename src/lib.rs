//! Derivation engine for an employee-management portal.
//!
//! This crate provides the pure derivations behind the portal's employee
//! listings: effective employee status (a stored status reconciled against a
//! vacation window), medical-certificate validity (one-year expiry from the
//! upload timestamp), and attendance hours (clock times minus breaks).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod derivation;
pub mod error;
pub mod models;
