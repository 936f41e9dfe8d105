//! Ontology values: the closed set of physical-quantity kinds

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::OntologyError;

/// Physical-quantity classification carried by a program value.
///
/// Declaration order is the iteration order of every qualifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OntologyValue {
    /// No constraint: accepts any underlying value
    #[serde(rename = "TOP")]
    Top,
    /// Homogeneous ordered container or fixed-size array
    #[serde(rename = "sequence")]
    Sequence,
    #[serde(rename = "position_3d")]
    Position3d,
    #[serde(rename = "velocity_3d")]
    Velocity3d,
    #[serde(rename = "force_3d")]
    Force3d,
    #[serde(rename = "torque_3d")]
    Torque3d,
    /// Contradictory qualifier: unreachable
    #[serde(rename = "BOTTOM")]
    Bottom,
}

lazy_static! {
    /// Label -> value lookup for decoding host annotations
    static ref BY_LABEL: HashMap<&'static str, OntologyValue> = OntologyValue::ALL
        .iter()
        .map(|v| (v.label(), *v))
        .collect();
}

impl OntologyValue {
    /// Every value, in declaration order. Use this instead of rebuilding.
    pub const ALL: [OntologyValue; 7] = [
        OntologyValue::Top,
        OntologyValue::Sequence,
        OntologyValue::Position3d,
        OntologyValue::Velocity3d,
        OntologyValue::Force3d,
        OntologyValue::Torque3d,
        OntologyValue::Bottom,
    ];

    /// Number of declared values
    pub const COUNT: usize = Self::ALL.len();

    /// Stable display label, as written into host annotations
    pub fn label(&self) -> &'static str {
        match self {
            OntologyValue::Top => "TOP",
            OntologyValue::Sequence => "sequence",
            OntologyValue::Position3d => "position_3d",
            OntologyValue::Velocity3d => "velocity_3d",
            OntologyValue::Force3d => "force_3d",
            OntologyValue::Torque3d => "torque_3d",
            OntologyValue::Bottom => "BOTTOM",
        }
    }

    /// Exact (case-sensitive) label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        BY_LABEL.get(label).copied()
    }

    /// TOP or BOTTOM
    pub fn is_sentinel(&self) -> bool {
        matches!(self, OntologyValue::Top | OntologyValue::Bottom)
    }
}

impl fmt::Display for OntologyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OntologyValue {
    type Err = OntologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| OntologyError::invalid_qualifier([s]))
    }
}
