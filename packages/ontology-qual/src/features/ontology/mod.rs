//! Ontology qualifier feature
//!
//! - `domain`: values, validated sets, lattice algebra (no host knowledge)
//! - `ports`: what the host framework must provide
//! - `infrastructure`: one-time initialization, the annotation adapter,
//!   an in-memory host

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    is_bottom, is_top, least_upper_bound, validate, OntologyValue, QualifierSet,
};
pub use infrastructure::{
    HostAnnotation, HostType, InMemoryHost, InMemoryHostError, OntologyAnnotations,
    OntologyContext, QualifierAdapter,
};
pub use ports::{AnnotationHost, TypeHost};
