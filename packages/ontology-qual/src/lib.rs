/*
 * Ontology Qualifiers - physical-quantity type qualifiers for static analysis
 *
 * A finite lattice of qualifier values (sequence, 3D position, velocity,
 * force, torque, plus TOP/BOTTOM) that a host type checker attaches to
 * program values, so code mixing incompatible quantities can be rejected.
 *
 * Feature-First Hexagonal Architecture:
 * - features/ontology/domain         : values, validated sets, lattice
 * - features/ontology/ports          : host annotation/type interfaces
 * - features/ontology/infrastructure : one-time init, adapter, in-memory host
 * - config/                          : host bindings (YAML v1)
 *
 * Usage:
 *   let config = OntologyConfig::default();
 *   let ctx = OntologyContext::new(InMemoryHost::for_config(&config), config)?;
 *   ctx.initialize()?;
 *   let joined = ctx.adapter().lub_annotations(&a, &b)?;
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

/// Shared macros
pub(crate) mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, OntologyConfig};
pub use errors::{OntologyError, Result};
pub use features::ontology::{
    is_bottom, is_top, least_upper_bound, validate, AnnotationHost, HostAnnotation, HostType,
    InMemoryHost, InMemoryHostError, OntologyAnnotations, OntologyContext, OntologyValue,
    QualifierAdapter, QualifierSet, TypeHost,
};
