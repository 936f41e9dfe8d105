//! In-memory host
//!
//! A self-contained implementation of both host ports. Annotations are plain
//! kind + element maps; types are a small structural model. Used by the test
//! suite and by embedders that run the domain without a compiler.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::config::OntologyConfig;
use crate::features::ontology::ports::{AnnotationHost, TypeHost};

/// Annotation instance: a kind name plus named label lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostAnnotation {
    pub kind: String,
    #[serde(default)]
    pub elements: BTreeMap<String, Vec<Option<String>>>,
}

impl HostAnnotation {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            elements: BTreeMap::new(),
        }
    }

    /// Set `element` to a raw label list (holes allowed)
    pub fn with_element(mut self, element: impl Into<String>, labels: Vec<Option<String>>) -> Self {
        self.elements.insert(element.into(), labels);
        self
    }

    /// Set `element` to a complete label list
    pub fn with_labels(self, element: impl Into<String>, labels: &[&str]) -> Self {
        let labels = labels.iter().map(|l| Some(l.to_string())).collect();
        self.with_element(element, labels)
    }
}

/// Static type as seen by the in-memory host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostType {
    Primitive(String),
    /// Fixed-size array of the element type
    Array(Box<HostType>),
    /// Declared (class/interface) type, fully qualified, with type arguments
    Declared { name: String, args: Vec<HostType> },
}

impl HostType {
    pub fn primitive(name: impl Into<String>) -> Self {
        HostType::Primitive(name.into())
    }

    pub fn array_of(element: HostType) -> Self {
        HostType::Array(Box::new(element))
    }

    pub fn declared(name: impl Into<String>) -> Self {
        HostType::Declared {
            name: name.into(),
            args: vec![],
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<HostType>) -> Self {
        HostType::Declared {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InMemoryHostError {
    #[error("unknown annotation kind '{0}'")]
    UnknownKind(String),
}

/// Host that knows a fixed set of annotation kinds
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    kinds: BTreeSet<String>,
}

impl InMemoryHost {
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// Host with the qualifier and polymorphic-qualifier kinds of `config`
    pub fn for_config(config: &OntologyConfig) -> Self {
        Self::new([
            config.ontology_annotation.as_str(),
            config.poly_annotation.as_str(),
        ])
    }

    pub fn knows(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    fn check_kind(&self, kind: &str) -> Result<(), InMemoryHostError> {
        if self.knows(kind) {
            Ok(())
        } else {
            Err(InMemoryHostError::UnknownKind(kind.to_string()))
        }
    }
}

impl AnnotationHost for InMemoryHost {
    type Annotation = HostAnnotation;
    type Error = InMemoryHostError;

    fn annotation_kind(&self, name: &str) -> Result<HostAnnotation, InMemoryHostError> {
        self.check_kind(name)?;
        Ok(HostAnnotation::new(name))
    }

    fn build(
        &self,
        kind: &str,
        element: &str,
        labels: &[&str],
    ) -> Result<HostAnnotation, InMemoryHostError> {
        self.check_kind(kind)?;
        Ok(HostAnnotation::new(kind).with_labels(element, labels))
    }

    fn element_values(
        &self,
        annotation: &HostAnnotation,
        element: &str,
    ) -> Result<Option<Vec<Option<String>>>, InMemoryHostError> {
        Ok(annotation.elements.get(element).cloned())
    }

    fn same_kind_ignoring_values(&self, a: &HostAnnotation, b: &HostAnnotation) -> bool {
        a.kind == b.kind
    }
}

impl TypeHost for InMemoryHost {
    type Type = HostType;

    fn is_fixed_size_array(&self, ty: &HostType) -> bool {
        matches!(ty, HostType::Array(_))
    }

    fn is_declared_of_name(&self, ty: &HostType, name: &str) -> bool {
        matches!(ty, HostType::Declared { name: declared, .. } if declared == name)
    }
}
