//! Inverse Configuration
//!
//! Externally supplied, per-entity 4-tuples of inversion results: three
//! pairwise inversion kinds (Pair, Quasipair, Antipair) plus the numeric
//! inversion, always in that fixed slot order. The engine consumes these
//! tuples as opaque data; it never derives them.

use crate::registry::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The four inversion kinds, in fixed tuple-slot order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InverseKind {
    Pair,
    Quasipair,
    Antipair,
    Numeric,
}

impl InverseKind {
    /// All kinds in slot order (Pair=0, Quasipair=1, Antipair=2, Numeric=3)
    pub const ALL: [InverseKind; 4] = [
        InverseKind::Pair,
        InverseKind::Quasipair,
        InverseKind::Antipair,
        InverseKind::Numeric,
    ];

    /// The three pairwise kinds, in slot order
    pub const PAIRWISE: [InverseKind; 3] = [
        InverseKind::Pair,
        InverseKind::Quasipair,
        InverseKind::Antipair,
    ];
}

impl fmt::Display for InverseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InverseKind::Pair => write!(f, "Pair"),
            InverseKind::Quasipair => write!(f, "Quasipair"),
            InverseKind::Antipair => write!(f, "Antipair"),
            InverseKind::Numeric => write!(f, "Numeric"),
        }
    }
}

/// Fixed-order inversion tuple for one entity
///
/// Slots hold names of entities of the *same kind* as the owner. Any slot may
/// be empty; an empty slot makes every table row that needs it invalid rather
/// than failing the analysis.
///
/// # Examples
///
/// ```
/// use classpectanator::inverse::{InverseKind, InverseTuple};
///
/// let tuple = InverseTuple::full("Rogue", "Thief", "Thief", "Page");
/// assert_eq!(tuple.get(InverseKind::Pair), Some("Rogue"));
/// assert_eq!(InverseTuple::default().get(InverseKind::Numeric), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InverseTuple {
    pub pair: Option<String>,
    pub quasipair: Option<String>,
    pub antipair: Option<String>,
    pub numeric: Option<String>,
}

impl InverseTuple {
    /// Build a tuple with all four slots populated
    pub fn full(
        pair: impl Into<String>,
        quasipair: impl Into<String>,
        antipair: impl Into<String>,
        numeric: impl Into<String>,
    ) -> Self {
        InverseTuple {
            pair: Some(pair.into()),
            quasipair: Some(quasipair.into()),
            antipair: Some(antipair.into()),
            numeric: Some(numeric.into()),
        }
    }

    /// The slot for the given kind
    pub fn get(&self, kind: InverseKind) -> Option<&str> {
        match kind {
            InverseKind::Pair => self.pair.as_deref(),
            InverseKind::Quasipair => self.quasipair.as_deref(),
            InverseKind::Antipair => self.antipair.as_deref(),
            InverseKind::Numeric => self.numeric.as_deref(),
        }
    }
}

/// Per-entity inverse tuples for both kinds, indexed by entity name
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InverseConfig {
    classes: HashMap<String, InverseTuple>,
    aspects: HashMap<String, InverseTuple>,
}

impl InverseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: EntityKind) -> &HashMap<String, InverseTuple> {
        match kind {
            EntityKind::Class => &self.classes,
            EntityKind::Aspect => &self.aspects,
        }
    }

    /// Register the tuple for one entity, replacing any previous tuple
    pub fn insert(&mut self, kind: EntityKind, name: impl Into<String>, tuple: InverseTuple) {
        let map = match kind {
            EntityKind::Class => &mut self.classes,
            EntityKind::Aspect => &mut self.aspects,
        };
        map.insert(name.into(), tuple);
    }

    /// The tuple configured for an entity, if any
    pub fn get(&self, kind: EntityKind, name: &str) -> Option<&InverseTuple> {
        self.map(kind).get(name)
    }

    /// The tuple for an entity, falling back to the all-empty tuple
    ///
    /// Entities without configured inverses behave as if every slot were
    /// empty: their derived table rows come out invalid, nothing fails.
    pub fn tuple_or_empty(&self, kind: EntityKind, name: &str) -> InverseTuple {
        self.map(kind).get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_kind_order() {
        let tuple = InverseTuple::full("a", "b", "c", "d");
        let slots: Vec<_> = InverseKind::ALL
            .iter()
            .map(|&k| tuple.get(k).unwrap())
            .collect();
        assert_eq!(slots, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_missing_entity_falls_back_to_empty_tuple() {
        let config = InverseConfig::new();
        let tuple = config.tuple_or_empty(EntityKind::Class, "Knight");
        for kind in InverseKind::ALL {
            assert_eq!(tuple.get(kind), None);
        }
    }

    #[test]
    fn test_kinds_are_namespaced() {
        let mut config = InverseConfig::new();
        config.insert(
            EntityKind::Class,
            "Knight",
            InverseTuple::full("Rogue", "Thief", "Thief", "Page"),
        );
        assert!(config.get(EntityKind::Class, "Knight").is_some());
        assert!(config.get(EntityKind::Aspect, "Knight").is_none());
    }
}
