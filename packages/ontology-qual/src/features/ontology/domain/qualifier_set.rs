//! Validated qualifier instances

use serde::Serialize;
use std::collections::BTreeSet;

use super::ontology_value::OntologyValue;
use crate::errors::{OntologyError, Result};
use crate::shared::macros::debug;

/// Check a candidate value list as arguments of an ontology qualifier.
///
/// The list must be present, hold at least one value, and hold no absent
/// element. Duplicates are allowed; they collapse on set construction.
pub fn validate(values: Option<&[Option<OntologyValue>]>) -> Result<()> {
    match values {
        Some(list) if !list.is_empty() && list.iter().all(Option::is_some) => Ok(()),
        _ => {
            debug!("rejected ontology values: {:?}", values);
            Err(OntologyError::invalid_qualifier(values))
        }
    }
}

/// A non-empty, duplicate-free set of ontology values.
///
/// Only obtainable through [`QualifierSet::new`] / [`QualifierSet::from_raw`]
/// (both validate, as do `single`/`top`/`bottom`) or the lattice operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QualifierSet {
    values: BTreeSet<OntologyValue>,
}

impl QualifierSet {
    pub fn new(values: &[OntologyValue]) -> Result<Self> {
        let raw: Vec<Option<OntologyValue>> = values.iter().copied().map(Some).collect();
        Self::from_raw(Some(raw.as_slice()))
    }

    /// Build from untrusted host input (absent list / absent elements allowed in)
    pub fn from_raw(values: Option<&[Option<OntologyValue>]>) -> Result<Self> {
        validate(values)?;
        Ok(Self {
            values: values.into_iter().flatten().flatten().copied().collect(),
        })
    }

    /// `{TOP}`
    pub fn top() -> Result<Self> {
        Self::single(OntologyValue::Top)
    }

    /// `{BOTTOM}`
    pub fn bottom() -> Result<Self> {
        Self::single(OntologyValue::Bottom)
    }

    pub fn single(value: OntologyValue) -> Result<Self> {
        Self::from_raw(Some(&[Some(value)][..]))
    }

    /// Lattice results are built from a set already known to be non-empty.
    pub(super) fn from_nonempty(values: BTreeSet<OntologyValue>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    pub fn contains(&self, value: OntologyValue) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &OntologyValue> + '_ {
        self.values.iter()
    }

    pub fn to_vec(&self) -> Vec<OntologyValue> {
        self.values.iter().copied().collect()
    }

    /// Labels in declaration order, as written into host annotations
    pub fn labels(&self) -> Vec<&'static str> {
        self.values.iter().map(|v| v.label()).collect()
    }
}

impl<'a> IntoIterator for &'a QualifierSet {
    type Item = &'a OntologyValue;
    type IntoIter = std::collections::btree_set::Iter<'a, OntologyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl TryFrom<&[OntologyValue]> for QualifierSet {
    type Error = OntologyError;

    fn try_from(values: &[OntologyValue]) -> Result<Self> {
        Self::new(values)
    }
}
