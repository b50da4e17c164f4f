//! Configuration for the portal derivation engine.
//!
//! The derivations themselves need no configuration; what is configured is
//! the presentation side: display labels for the derived enums and the
//! document-type values recognized as medical certificates.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CertificateLabels, DocumentConfig, LabelConfig, PortalConfig, StatusLabels};
