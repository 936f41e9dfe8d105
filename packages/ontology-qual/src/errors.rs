//! Error types for ontology-qual
//!
//! Every failure is fatal to the current analysis step and is handed back to
//! the host unchanged; nothing here retries or defaults.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for qualifier operations
#[derive(Debug, Error)]
pub enum OntologyError {
    /// Absent, empty, or hole-containing value list (or an unknown label)
    #[error("ontology values are invalid: {0}")]
    InvalidQualifier(String),

    /// Singletons requested before `OntologyContext::initialize`
    #[error("ontology domain is not initialized: {0}")]
    UninitializedDomain(String),

    /// Error raised by the host annotation/type interface, passed through
    #[error("host error: {0}")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl OntologyError {
    /// Create an invalid-qualifier error naming the offending list
    pub fn invalid_qualifier(values: impl std::fmt::Debug) -> Self {
        OntologyError::InvalidQualifier(format!("{:?}", values))
    }

    pub fn uninitialized(msg: impl Into<String>) -> Self {
        OntologyError::UninitializedDomain(msg.into())
    }

    /// Wrap a host interface error without altering it
    pub fn host(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        OntologyError::Host(Box::new(err))
    }
}

/// Result type alias for qualifier operations
pub type Result<T> = std::result::Result<T, OntologyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_qualifier_lists_values() {
        let err = OntologyError::invalid_qualifier(vec![Some("TOP"), None]);
        let msg = format!("{}", err);
        assert!(msg.starts_with("ontology values are invalid"));
        assert!(msg.contains("None"));
        assert!(msg.contains("TOP"));
    }

    #[test]
    fn test_host_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such annotation");
        let err = OntologyError::host(io_err);

        assert!(matches!(err, OntologyError::Host(_)));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("no such annotation"));
    }

    #[test]
    fn test_config_error_conversion() {
        fn inner() -> Result<()> {
            let loaded: std::result::Result<(), ConfigError> = Err(ConfigError::MissingVersion);
            loaded?;
            Ok(())
        }

        let err = inner().unwrap_err();
        assert!(matches!(err, OntologyError::Config(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_uninitialized_display() {
        let err = OntologyError::uninitialized("annotations() called first");
        assert_eq!(
            err.to_string(),
            "ontology domain is not initialized: annotations() called first"
        );
    }
}
