//! Qualifier domain configuration
//!
//! Names the host-side handles the domain binds to (annotation kinds, the
//! element carrying the value list) and the host types that default to
//! `SEQUENCE`. Loadable from a versioned YAML file.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ontology_qual::config::OntologyConfig;
//!
//! let config = OntologyConfig::default();
//! let config = OntologyConfig::from_yaml("ontology.yaml")?;
//! ```

pub mod error;
pub mod ontology_config;

pub use error::{ConfigError, ConfigResult};
pub use ontology_config::{OntologyConfig, SUPPORTED_VERSIONS};
