pub mod adapter;
pub mod context;
pub mod in_memory_host;

pub use adapter::QualifierAdapter;
pub use context::{OntologyAnnotations, OntologyContext};
pub use in_memory_host::{HostAnnotation, HostType, InMemoryHost, InMemoryHostError};
