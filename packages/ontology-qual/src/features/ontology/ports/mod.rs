pub mod annotation_host;
pub mod type_host;

pub use annotation_host::AnnotationHost;
pub use type_host::TypeHost;
