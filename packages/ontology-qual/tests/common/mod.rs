//! Common test utilities for ontology-qual

#![allow(dead_code)]

use ontology_qual::{HostAnnotation, InMemoryHost, OntologyConfig, OntologyContext, OntologyValue, QualifierSet};

/// Context over the in-memory host with default config, already initialized
pub fn initialized_context() -> OntologyContext<InMemoryHost> {
    let ctx = fresh_context();
    ctx.initialize().expect("in-memory host knows both kinds");
    ctx
}

/// Context over the in-memory host with default config, not initialized
pub fn fresh_context() -> OntologyContext<InMemoryHost> {
    let config = OntologyConfig::default();
    OntologyContext::new(InMemoryHost::for_config(&config), config).expect("default config is valid")
}

/// `@Ontology(values = {...})` with the given labels
pub fn ontology(labels: &[&str]) -> HostAnnotation {
    HostAnnotation::new("Ontology").with_labels("values", labels)
}

pub fn set(values: &[OntologyValue]) -> QualifierSet {
    QualifierSet::new(values).expect("non-empty test set")
}

/// Map arbitrary indices onto values (for quickcheck inputs)
pub fn values_from_indices(indices: &[u8]) -> Vec<OntologyValue> {
    indices
        .iter()
        .map(|i| OntologyValue::ALL[*i as usize % OntologyValue::COUNT])
        .collect()
}
