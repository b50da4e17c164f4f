//! Configuration types for the portal derivation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{CertificateStatus, EffectiveStatus};

/// Display labels for each effective status value.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusLabels {
    /// Label for [`EffectiveStatus::Active`].
    pub active: String,
    /// Label for [`EffectiveStatus::OnLeave`].
    pub on_leave: String,
    /// Label for [`EffectiveStatus::Vacation`].
    pub vacation: String,
    /// Label for [`EffectiveStatus::Inactive`].
    pub inactive: String,
}

/// Display labels for each certificate status value.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateLabels {
    /// Label for [`CertificateStatus::Valid`].
    pub valid: String,
    /// Label for [`CertificateStatus::Expired`].
    pub expired: String,
    /// Label for [`CertificateStatus::Missing`].
    pub missing: String,
}

/// Label configuration file structure (labels.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
    /// Labels for effective statuses.
    pub status_labels: StatusLabels,
    /// Labels for certificate statuses.
    pub certificate_labels: CertificateLabels,
}

/// Document configuration file structure (documents.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Stored document-type values that count as medical certificates.
    pub medical_certificate_types: Vec<String>,
}

/// The complete portal configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    labels: LabelConfig,
    documents: DocumentConfig,
}

impl PortalConfig {
    /// Creates a new PortalConfig from its component parts.
    pub fn new(labels: LabelConfig, documents: DocumentConfig) -> Self {
        Self { labels, documents }
    }

    /// Returns the display label for an effective status.
    pub fn status_label(&self, status: EffectiveStatus) -> &str {
        match status {
            EffectiveStatus::Active => &self.labels.status_labels.active,
            EffectiveStatus::OnLeave => &self.labels.status_labels.on_leave,
            EffectiveStatus::Vacation => &self.labels.status_labels.vacation,
            EffectiveStatus::Inactive => &self.labels.status_labels.inactive,
        }
    }

    /// Returns the display label for a certificate status.
    pub fn certificate_label(&self, status: CertificateStatus) -> &str {
        match status {
            CertificateStatus::Valid => &self.labels.certificate_labels.valid,
            CertificateStatus::Expired => &self.labels.certificate_labels.expired,
            CertificateStatus::Missing => &self.labels.certificate_labels.missing,
        }
    }

    /// Returns true when the given document-type value counts as a medical
    /// certificate.
    pub fn is_medical_certificate(&self, document_type: &str) -> bool {
        self.documents
            .medical_certificate_types
            .iter()
            .any(|t| t == document_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> PortalConfig {
        PortalConfig::new(
            LabelConfig {
                status_labels: StatusLabels {
                    active: "Activo".to_string(),
                    on_leave: "De permiso".to_string(),
                    vacation: "Vacaciones".to_string(),
                    inactive: "Inactivo".to_string(),
                },
                certificate_labels: CertificateLabels {
                    valid: "Vigente".to_string(),
                    expired: "Vencido".to_string(),
                    missing: "Sin certificado".to_string(),
                },
            },
            DocumentConfig {
                medical_certificate_types: vec![
                    "medical_certificate".to_string(),
                    "certificado_medico".to_string(),
                ],
            },
        )
    }

    #[test]
    fn test_status_labels() {
        let config = create_test_config();
        assert_eq!(config.status_label(EffectiveStatus::Active), "Activo");
        assert_eq!(config.status_label(EffectiveStatus::Vacation), "Vacaciones");
        assert_eq!(config.status_label(EffectiveStatus::Inactive), "Inactivo");
    }

    #[test]
    fn test_certificate_labels() {
        let config = create_test_config();
        assert_eq!(config.certificate_label(CertificateStatus::Valid), "Vigente");
        assert_eq!(
            config.certificate_label(CertificateStatus::Missing),
            "Sin certificado"
        );
    }

    #[test]
    fn test_is_medical_certificate() {
        let config = create_test_config();
        assert!(config.is_medical_certificate("medical_certificate"));
        assert!(config.is_medical_certificate("certificado_medico"));
        assert!(!config.is_medical_certificate("uniform"));
    }

    #[test]
    fn test_label_config_deserializes_from_yaml() {
        let yaml = r#"
status_labels:
  active: "Activo"
  on_leave: "De permiso"
  vacation: "Vacaciones"
  inactive: "Inactivo"
certificate_labels:
  valid: "Vigente"
  expired: "Vencido"
  missing: "Sin certificado"
"#;
        let labels: LabelConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(labels.status_labels.on_leave, "De permiso");
        assert_eq!(labels.certificate_labels.expired, "Vencido");
    }
}
