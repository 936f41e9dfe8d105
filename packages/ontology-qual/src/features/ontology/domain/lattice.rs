//! Lattice algebra over qualifier sets
//!
//! ```text
//!                    TOP
//!        /      /     |     \      \
//!   sequence position velocity force torque
//!        \      \     |     /      /
//!                  BOTTOM
//! ```
//!
//! A qualifier is a set of values; the join keeps what both sides agree on
//! and falls back to TOP when nothing is shared.

use std::collections::BTreeSet;

use super::ontology_value::OntologyValue;
use super::qualifier_set::QualifierSet;

/// True iff nothing is declared or TOP is declared.
///
/// Works on raw declared values: an annotation with no values is TOP.
pub fn is_top<'a>(values: impl IntoIterator<Item = &'a OntologyValue>) -> bool {
    let mut any = false;
    for value in values {
        if *value == OntologyValue::Top {
            return true;
        }
        any = true;
    }
    !any
}

/// True iff every declared value is present (over-constrained) or BOTTOM is declared.
pub fn is_bottom<'a>(values: impl IntoIterator<Item = &'a OntologyValue>) -> bool {
    let distinct: BTreeSet<OntologyValue> = values.into_iter().copied().collect();
    distinct.len() == OntologyValue::COUNT || distinct.contains(&OntologyValue::Bottom)
}

/// Join of two qualifiers.
///
/// If `a` holds TOP the result is `{TOP}` whatever `b` is. Otherwise the
/// result is `a ∩ b` (walked in `a`'s order), or `{TOP}` when that is empty.
/// Not symmetric: only `a` is checked for TOP.
pub fn least_upper_bound(a: &QualifierSet, b: &QualifierSet) -> QualifierSet {
    let mut lub = BTreeSet::new();

    for value in a {
        if *value == OntologyValue::Top {
            lub.clear();
            break;
        }
        if b.contains(*value) {
            lub.insert(*value);
        }
    }

    if lub.is_empty() {
        lub.insert(OntologyValue::Top);
    }
    QualifierSet::from_nonempty(lub)
}

impl QualifierSet {
    pub fn is_top(&self) -> bool {
        is_top(self)
    }

    pub fn is_bottom(&self) -> bool {
        is_bottom(self)
    }

    /// `least_upper_bound(self, other)`
    pub fn lub(&self, other: &QualifierSet) -> QualifierSet {
        least_upper_bound(self, other)
    }
}
