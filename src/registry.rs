//! Entity Registry
//!
//! Immutable bidirectional mapping between entity names and lattice values,
//! kept separately for the two entity kinds (Class and Aspect). Lookups are
//! exact-match in both directions; values are never interpolated or rounded
//! at this layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The two disjoint entity kinds of the lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    Aspect,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Class => write!(f, "class"),
            EntityKind::Aspect => write!(f, "aspect"),
        }
    }
}

/// Lookup failures surfaced by the registry
///
/// `UnknownEntity` on an *input* name aborts a whole analysis; `NoSuchValue`
/// on a derived coordinate only invalidates the single table row, rotation
/// step, or reflection that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown {kind} name: {name}")]
    UnknownEntity { kind: EntityKind, name: String },

    #[error("no {kind} has value {value}")]
    NoSuchValue { kind: EntityKind, value: i32 },
}

/// An ordered (class, aspect) pair identified by entity names
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classpect {
    pub class: String,
    pub aspect: String,
}

impl Classpect {
    pub fn new(class: impl Into<String>, aspect: impl Into<String>) -> Self {
        Classpect {
            class: class.into(),
            aspect: aspect.into(),
        }
    }
}

impl fmt::Display for Classpect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.class, self.aspect)
    }
}

/// One kind's name/value table with precomputed indices in both directions
#[derive(Clone, Debug, Default)]
struct KindTable {
    /// Entities in insertion order; iteration order is part of the contract
    entries: Vec<(String, i32)>,
    by_name: HashMap<String, i32>,
    by_value: HashMap<i32, usize>,
}

impl KindTable {
    fn new(entries: Vec<(String, i32)>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_value = HashMap::with_capacity(entries.len());
        for (idx, (name, value)) in entries.iter().enumerate() {
            by_name.insert(name.clone(), *value);
            by_value.insert(*value, idx);
        }
        KindTable {
            entries,
            by_name,
            by_value,
        }
    }
}

/// Bidirectional name↔value registry for both entity kinds
///
/// The registry is supplied fully populated and never mutated afterwards.
/// Within a kind the name↔value mapping must be a bijection and value 0 is
/// never assigned; supplied tables are trusted, not validated.
///
/// # Examples
///
/// ```
/// use classpectanator::registry::{EntityKind, Registry};
///
/// let registry = Registry::from_tables(
///     &[("Knight", -3), ("Maid", 1)],
///     &[("Time", 1), ("Mind", -3)],
/// );
///
/// assert_eq!(registry.value_of(EntityKind::Class, "Knight").unwrap(), -3);
/// assert_eq!(registry.name_of(EntityKind::Aspect, -3).unwrap(), "Mind");
/// assert!(registry.value_of(EntityKind::Class, "Ld").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    classes: KindTable,
    aspects: KindTable,
}

impl Registry {
    /// Build a registry from owned entity tables, preserving insertion order
    pub fn new(classes: Vec<(String, i32)>, aspects: Vec<(String, i32)>) -> Self {
        Registry {
            classes: KindTable::new(classes),
            aspects: KindTable::new(aspects),
        }
    }

    /// Build a registry from borrowed tables (handy for static datasets)
    pub fn from_tables(classes: &[(&str, i32)], aspects: &[(&str, i32)]) -> Self {
        let own = |t: &[(&str, i32)]| t.iter().map(|&(n, v)| (n.to_string(), v)).collect();
        Registry::new(own(classes), own(aspects))
    }

    fn table(&self, kind: EntityKind) -> &KindTable {
        match kind {
            EntityKind::Class => &self.classes,
            EntityKind::Aspect => &self.aspects,
        }
    }

    /// Look up the lattice value of a registered name
    pub fn value_of(&self, kind: EntityKind, name: &str) -> Result<i32, RegistryError> {
        self.table(kind)
            .by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownEntity {
                kind,
                name: name.to_string(),
            })
    }

    /// Look up the name holding exactly the given value
    pub fn name_of(&self, kind: EntityKind, value: i32) -> Result<&str, RegistryError> {
        let table = self.table(kind);
        table
            .by_value
            .get(&value)
            .map(|&idx| table.entries[idx].0.as_str())
            .ok_or(RegistryError::NoSuchValue { kind, value })
    }

    /// Whether a name is registered for the given kind
    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        self.table(kind).by_name.contains_key(name)
    }

    /// Entities of a kind as (name, value) pairs, in insertion order
    pub fn entries(&self, kind: EntityKind) -> impl Iterator<Item = (&str, i32)> {
        self.table(kind).entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Entity names of a kind, in insertion order
    pub fn names(&self, kind: EntityKind) -> impl Iterator<Item = &str> {
        self.table(kind).entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of entities registered for a kind
    pub fn len(&self, kind: EntityKind) -> usize {
        self.table(kind).entries.len()
    }

    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.table(kind).entries.is_empty()
    }
}
