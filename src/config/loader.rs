//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading portal
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DocumentConfig, LabelConfig, PortalConfig};

/// Loads and provides access to the portal configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/portal/
/// ├── labels.yaml     # Display labels for derived statuses
/// └── documents.yaml  # Document-type values counted as medical certificates
/// ```
///
/// # Example
///
/// ```no_run
/// use portal_engine::config::ConfigLoader;
/// use portal_engine::models::EffectiveStatus;
///
/// let loader = ConfigLoader::load("./config/portal").unwrap();
/// let label = loader.config().status_label(EffectiveStatus::Active);
/// println!("Active label: {}", label);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PortalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/portal")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let labels_path = path.join("labels.yaml");
        let labels = Self::load_yaml::<LabelConfig>(&labels_path)?;

        let documents_path = path.join("documents.yaml");
        let documents = Self::load_yaml::<DocumentConfig>(&documents_path)?;

        Ok(Self {
            config: PortalConfig::new(labels, documents),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying portal configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}
