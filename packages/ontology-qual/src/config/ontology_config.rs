//! Ontology configuration (YAML schema v1)

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Host bindings and defaulting rules for the ontology domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OntologyConfig {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Host name of the qualifier annotation kind
    #[serde(default = "default_ontology_annotation")]
    pub ontology_annotation: String,

    /// Host name of the polymorphic qualifier annotation kind
    #[serde(default = "default_poly_annotation")]
    pub poly_annotation: String,

    /// Annotation element holding the declared value list
    #[serde(default = "default_values_element")]
    pub values_element: String,

    /// Fully qualified declared types that default to `SEQUENCE`
    #[serde(default = "default_sequence_types")]
    pub sequence_types: Vec<String>,

    /// Whether fixed-size array types default to `SEQUENCE`
    #[serde(default = "default_true")]
    pub arrays_are_sequences: bool,
}

fn default_ontology_annotation() -> String {
    "Ontology".to_string()
}

fn default_poly_annotation() -> String {
    "PolyOntology".to_string()
}

fn default_values_element() -> String {
    "values".to_string()
}

fn default_sequence_types() -> Vec<String> {
    vec![
        "java.util.LinkedList".to_string(),
        "java.util.ArrayList".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            version: Some(1),
            ontology_annotation: default_ontology_annotation(),
            poly_annotation: default_poly_annotation(),
            values_element: default_values_element(),
            sequence_types: default_sequence_types(),
            arrays_are_sequences: true,
        }
    }
}

impl OntologyConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: OntologyConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check version and that every host name is usable
    pub fn validate(&self) -> ConfigResult<()> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        for (field, value) in [
            ("ontology_annotation", &self.ontology_annotation),
            ("poly_annotation", &self.poly_annotation),
            ("values_element", &self.values_element),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::validation(field, "must not be empty"));
            }
        }

        if self.ontology_annotation == self.poly_annotation {
            return Err(ConfigError::validation(
                "poly_annotation",
                format!(
                    "must differ from ontology_annotation ('{}')",
                    self.ontology_annotation
                ),
            ));
        }

        if let Some(blank) = self.sequence_types.iter().position(|t| t.trim().is_empty()) {
            return Err(ConfigError::validation(
                "sequence_types",
                format!("entry {} is empty", blank),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = OntologyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.sequence_types,
            vec!["java.util.LinkedList".to_string(), "java.util.ArrayList".to_string()]
        );
        assert!(config.arrays_are_sequences);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = OntologyConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("values_element: values"));

        let recovered = OntologyConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let yaml = r#"
version: 1
sequence_types:
  - java.util.Vector
arrays_are_sequences: false
"#;
        let config = OntologyConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.ontology_annotation, "Ontology");
        assert_eq!(config.poly_annotation, "PolyOntology");
        assert_eq!(config.sequence_types, vec!["java.util.Vector".to_string()]);
        assert!(!config.arrays_are_sequences);
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"version: 1\nontology_annotation: Quantity\n")
            .unwrap();

        let config = OntologyConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.ontology_annotation, "Quantity");
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = OntologyConfig::from_yaml_str("ontology_annotation: Ontology\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = OntologyConfig::from_yaml_str("version: 7\n");
        match result {
            Err(ConfigError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 7);
                assert_eq!(supported, vec![1]);
            }
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = OntologyConfig::from_yaml_str("version: 1\nmax_depth: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_validation_rejects_same_kind_names() {
        let config = OntologyConfig {
            poly_annotation: "Ontology".to_string(),
            ..OntologyConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("poly_annotation"));
    }

    #[test]
    fn test_validation_rejects_blank_names() {
        let config = OntologyConfig {
            values_element: "  ".to_string(),
            ..OntologyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "values_element"
        ));

        let config = OntologyConfig {
            sequence_types: vec!["java.util.ArrayList".to_string(), String::new()],
            ..OntologyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = OntologyConfig::from_yaml("/nonexistent/ontology.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
