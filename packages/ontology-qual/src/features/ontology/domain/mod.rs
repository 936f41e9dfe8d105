pub mod lattice;
pub mod ontology_value;
pub mod qualifier_set;

pub use lattice::{is_bottom, is_top, least_upper_bound};
pub use ontology_value::OntologyValue;
pub use qualifier_set::{validate, QualifierSet};
