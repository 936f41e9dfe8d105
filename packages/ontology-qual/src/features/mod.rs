//! Feature modules

pub mod ontology;
