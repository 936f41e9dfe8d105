//! One-time domain initialization
//!
//! `OntologyContext` owns the host handles and the process-wide qualifier
//! annotations (`ONTOLOGY`, `ONTOLOGY_TOP`, `ONTOLOGY_BOTTOM`,
//! `POLY_ONTOLOGY`). The annotations are built once by [`initialize`] and
//! are read-only afterwards; share the context by reference (or `Arc`)
//! across analysis tasks.
//!
//! [`initialize`]: OntologyContext::initialize

use once_cell::sync::OnceCell;

use super::adapter::QualifierAdapter;
use crate::config::OntologyConfig;
use crate::errors::{OntologyError, Result};
use crate::features::ontology::domain::QualifierSet;
use crate::features::ontology::ports::AnnotationHost;
use crate::shared::macros::{debug, info};

/// The process-wide qualifier annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyAnnotations<A> {
    /// Value-less qualifier kind, used for same-kind checks
    pub ontology: A,
    /// Qualifier holding exactly `{TOP}`
    pub ontology_top: A,
    /// Qualifier holding exactly `{BOTTOM}`
    pub ontology_bottom: A,
    /// Polymorphic qualifier kind; never decomposed
    pub poly_ontology: A,
}

pub struct OntologyContext<H: AnnotationHost> {
    host: H,
    config: OntologyConfig,
    annotations: OnceCell<OntologyAnnotations<H::Annotation>>,
}

impl<H: AnnotationHost> OntologyContext<H> {
    /// Bind the host handles. Nothing is built until [`Self::initialize`].
    pub fn new(host: H, config: OntologyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            annotations: OnceCell::new(),
        })
    }

    /// Build the qualifier annotations. Later calls return the same ones.
    pub fn initialize(&self) -> Result<&OntologyAnnotations<H::Annotation>> {
        if let Some(annotations) = self.annotations.get() {
            debug!("ontology domain already initialized");
            return Ok(annotations);
        }
        self.annotations.get_or_try_init(|| self.build_annotations())
    }

    /// The qualifier annotations; `UninitializedDomain` before `initialize`
    pub fn annotations(&self) -> Result<&OntologyAnnotations<H::Annotation>> {
        self.annotations.get().ok_or_else(|| {
            OntologyError::uninitialized("annotations requested before initialize()")
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.annotations.get().is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &OntologyConfig {
        &self.config
    }

    pub fn adapter(&self) -> QualifierAdapter<'_, H> {
        QualifierAdapter::new(self)
    }

    /// Encode a set as a qualifier annotation of the configured kind
    pub(super) fn encode(&self, set: &QualifierSet) -> Result<H::Annotation> {
        self.host
            .build(
                &self.config.ontology_annotation,
                &self.config.values_element,
                &set.labels(),
            )
            .map_err(OntologyError::host)
    }

    fn kind(&self, name: &str) -> Result<H::Annotation> {
        self.host.annotation_kind(name).map_err(OntologyError::host)
    }

    fn build_annotations(&self) -> Result<OntologyAnnotations<H::Annotation>> {
        let annotations = OntologyAnnotations {
            ontology: self.kind(&self.config.ontology_annotation)?,
            ontology_top: self.encode(&QualifierSet::top()?)?,
            ontology_bottom: self.encode(&QualifierSet::bottom()?)?,
            poly_ontology: self.kind(&self.config.poly_annotation)?,
        };
        info!(
            "ontology domain initialized (kind={}, poly={})",
            self.config.ontology_annotation, self.config.poly_annotation
        );
        Ok(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::features::ontology::infrastructure::{HostAnnotation, InMemoryHost};

    fn context() -> OntologyContext<InMemoryHost> {
        let config = OntologyConfig::default();
        OntologyContext::new(InMemoryHost::for_config(&config), config).unwrap()
    }

    #[test]
    fn test_annotations_before_initialize() {
        let ctx = context();
        assert!(!ctx.is_initialized());
        assert!(matches!(
            ctx.annotations(),
            Err(OntologyError::UninitializedDomain(_))
        ));
    }

    #[test]
    fn test_initialize_builds_singletons() {
        let ctx = context();
        let annotations = ctx.initialize().unwrap();

        assert_eq!(annotations.ontology, HostAnnotation::new("Ontology"));
        assert_eq!(
            annotations.ontology_top,
            HostAnnotation::new("Ontology").with_labels("values", &["TOP"])
        );
        assert_eq!(
            annotations.ontology_bottom,
            HostAnnotation::new("Ontology").with_labels("values", &["BOTTOM"])
        );
        assert_eq!(annotations.poly_ontology, HostAnnotation::new("PolyOntology"));
        assert!(ctx.is_initialized());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let ctx = context();
        let first = ctx.initialize().unwrap();
        let second = ctx.initialize().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(ctx.annotations().unwrap(), first));
    }

    #[test]
    fn test_initialize_surfaces_host_error() {
        // Host only knows the qualifier kind, not the polymorphic one
        let ctx = OntologyContext::new(InMemoryHost::new(["Ontology"]), OntologyConfig::default())
            .unwrap();

        let err = ctx.initialize().unwrap_err();
        assert!(matches!(err, OntologyError::Host(_)));
        assert!(err.to_string().contains("PolyOntology"));
        assert!(!ctx.is_initialized());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = OntologyConfig {
            version: None,
            ..OntologyConfig::default()
        };
        let result = OntologyContext::new(InMemoryHost::default(), config);
        assert!(matches!(
            result,
            Err(OntologyError::Config(ConfigError::MissingVersion))
        ));
    }
}
