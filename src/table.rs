//! Cross Table Generator and Section Extractor
//!
//! Builds the 24-row cross product of class-inversion kind × aspect rule for
//! one classpect, then extracts the named, deduplicated subsets (numeric
//! inverse, pairwise inverses, siblings, shadows) presentation layers consume.

use crate::inverse::{InverseKind, InverseTuple};
use crate::registry::{Classpect, EntityKind, Registry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the resulting aspect of a table row is chosen, in fixed column order
///
/// The first four rules read the matching slot of the aspect's inverse tuple.
/// `Preserve` and `Invert` instead solve for the aspect value that keeps or
/// negates the classpect's original total once the class has been swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRule {
    Pair,
    Quasipair,
    Antipair,
    Numeric,
    Preserve,
    Invert,
}

impl AspectRule {
    /// All rules in column order
    pub const ALL: [AspectRule; 6] = [
        AspectRule::Pair,
        AspectRule::Quasipair,
        AspectRule::Antipair,
        AspectRule::Numeric,
        AspectRule::Preserve,
        AspectRule::Invert,
    ];

    fn tuple_kind(self) -> Option<InverseKind> {
        match self {
            AspectRule::Pair => Some(InverseKind::Pair),
            AspectRule::Quasipair => Some(InverseKind::Quasipair),
            AspectRule::Antipair => Some(InverseKind::Antipair),
            AspectRule::Numeric => Some(InverseKind::Numeric),
            AspectRule::Preserve | AspectRule::Invert => None,
        }
    }
}

impl fmt::Display for AspectRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRule::Pair => write!(f, "Pair"),
            AspectRule::Quasipair => write!(f, "Quasipair"),
            AspectRule::Antipair => write!(f, "Antipair"),
            AspectRule::Numeric => write!(f, "Numeric"),
            AspectRule::Preserve => write!(f, "Preserve"),
            AspectRule::Invert => write!(f, "Invert"),
        }
    }
}

/// One row of the cross table
///
/// Names are recorded as declared even when they fail to resolve; `valid` is
/// true exactly when both the resulting class and the resulting aspect
/// resolved against the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub class_kind: InverseKind,
    pub aspect_rule: AspectRule,
    pub class_name: Option<String>,
    pub aspect_name: Option<String>,
    pub valid: bool,
}

impl TableEntry {
    /// The resulting classpect, present only for valid rows
    pub fn classpect(&self) -> Option<Classpect> {
        if !self.valid {
            return None;
        }
        match (&self.class_name, &self.aspect_name) {
            (Some(c), Some(a)) => Some(Classpect::new(c.clone(), a.clone())),
            _ => None,
        }
    }
}

/// The full 24-row table for one classpect
///
/// Row order is stable and reproducible: grouped by class kind in tuple-slot
/// order, aspect rules in column order within each group.
///
/// # Examples
///
/// ```
/// use classpectanator::data;
/// use classpectanator::inverse::InverseKind;
/// use classpectanator::table::AspectRule;
///
/// let engine = data::canon_engine();
/// let analysis = engine.analyze("Knight", "Time").unwrap();
///
/// assert_eq!(analysis.table.entries.len(), 24);
/// let row = analysis.table.row(InverseKind::Numeric, AspectRule::Numeric);
/// assert_eq!(row.class_name.as_deref(), Some("Page"));
/// assert_eq!(row.aspect_name.as_deref(), Some("Rage"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTable {
    pub entries: Vec<TableEntry>,
}

impl CrossTable {
    /// Generate the table for a classpect with the given original total
    ///
    /// Declared inverse names that are not registry entities surface as
    /// invalid rows, never as errors.
    pub fn generate(
        registry: &Registry,
        class_tuple: &InverseTuple,
        aspect_tuple: &InverseTuple,
        original_total: i32,
    ) -> Self {
        let mut entries = Vec::with_capacity(InverseKind::ALL.len() * AspectRule::ALL.len());

        for class_kind in InverseKind::ALL {
            let class_name = class_tuple.get(class_kind);
            let class_value = class_name
                .and_then(|n| registry.value_of(EntityKind::Class, n).ok());

            for aspect_rule in AspectRule::ALL {
                let aspect_name = match aspect_rule.tuple_kind() {
                    Some(kind) => aspect_tuple.get(kind).map(str::to_string),
                    None => {
                        // Solve total ± desired = 0 for the swapped class;
                        // misses leave the slot empty.
                        class_value.and_then(|cv| {
                            let desired = match aspect_rule {
                                AspectRule::Preserve => original_total - cv,
                                _ => -original_total - cv,
                            };
                            registry
                                .name_of(EntityKind::Aspect, desired)
                                .ok()
                                .map(str::to_string)
                        })
                    }
                };

                let aspect_resolves = aspect_name
                    .as_deref()
                    .map(|n| registry.contains(EntityKind::Aspect, n))
                    .unwrap_or(false);

                entries.push(TableEntry {
                    class_kind,
                    aspect_rule,
                    class_name: class_name.map(str::to_string),
                    aspect_name,
                    valid: class_value.is_some() && aspect_resolves,
                });
            }
        }

        CrossTable { entries }
    }

    /// The row at a (class kind, aspect rule) coordinate
    pub fn row(&self, class_kind: InverseKind, aspect_rule: AspectRule) -> &TableEntry {
        let ck = InverseKind::ALL
            .iter()
            .position(|&k| k == class_kind)
            .unwrap_or(0);
        let ar = AspectRule::ALL
            .iter()
            .position(|&r| r == aspect_rule)
            .unwrap_or(0);
        &self.entries[ck * AspectRule::ALL.len() + ar]
    }

    /// The numeric-inverse row, kept only when valid
    pub fn numeric_inverse(&self) -> Option<TableEntry> {
        let row = self.row(InverseKind::Numeric, AspectRule::Numeric);
        row.valid.then(|| row.clone())
    }

    /// Rows where class kind and aspect rule are the same pairwise kind
    pub fn pairwise_inverses(&self) -> Vec<TableEntry> {
        self.section(|kind| match kind {
            InverseKind::Pair => AspectRule::Pair,
            InverseKind::Quasipair => AspectRule::Quasipair,
            _ => AspectRule::Antipair,
        })
    }

    /// Pairwise class swaps that preserve the original total
    pub fn siblings(&self) -> Vec<TableEntry> {
        self.section(|_| AspectRule::Preserve)
    }

    /// Pairwise class swaps that negate the original total
    pub fn shadows(&self) -> Vec<TableEntry> {
        self.section(|_| AspectRule::Invert)
    }

    /// Valid rows for the three pairwise kinds, deduplicated by resulting
    /// classpect, first occurrence wins in Pair, Quasipair, Antipair order
    fn section(&self, rule_for: impl Fn(InverseKind) -> AspectRule) -> Vec<TableEntry> {
        let mut seen: Vec<Classpect> = Vec::with_capacity(3);
        let mut out = Vec::with_capacity(3);
        for kind in InverseKind::PAIRWISE {
            let row = self.row(kind, rule_for(kind));
            if let Some(result) = row.classpect() {
                if !seen.contains(&result) {
                    seen.push(result);
                    out.push(row.clone());
                }
            }
        }
        out
    }
}
