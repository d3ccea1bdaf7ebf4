//! Classpect analysis
//!
//! Assembles one `Analysis` per query from the leaf components: the 24-row
//! cross table and its sections, the rotation/reflection transforms, the
//! total-value equivalence classes, and the balanced/symmetric property tags.
//!
//! Every call is independent and side-effect-free; the engine holds only
//! read-only configuration, so a shared `Engine` is safe to query from
//! multiple threads without locking.

use crate::characters::{Character, CharacterIndex};
use crate::inverse::{InverseConfig, InverseTuple};
use crate::registry::{Classpect, EntityKind, Registry, RegistryError};
use crate::table::{CrossTable, TableEntry};
use crate::transform::{self, Rotation};
use serde::{Deserialize, Serialize};

/// Complete analysis of one classpect
///
/// Created fresh on every query and never mutated after construction. All
/// lists are deduplicated and ordered as documented on the components that
/// produce them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    pub classpect: Classpect,
    pub original_total: i32,
    /// The queried class's configured inverse tuple
    pub class_inverses: InverseTuple,
    /// The queried aspect's configured inverse tuple
    pub aspect_inverses: InverseTuple,
    pub numeric_inverse: Option<TableEntry>,
    pub pairwise_inverses: Vec<TableEntry>,
    pub siblings: Vec<TableEntry>,
    pub shadows: Vec<TableEntry>,
    pub rotations: Vec<Rotation>,
    pub reflection: Option<Classpect>,
    pub same_value: Vec<Classpect>,
    pub opposite_value: Vec<Classpect>,
    pub balanced: bool,
    pub symmetric: bool,
    pub table: CrossTable,
    pub canon_characters: Vec<Character>,
    pub non_canon_characters: Vec<Character>,
}

/// The analysis engine: registry, inverse configuration, character roster
///
/// All configuration is injected at construction; nothing is read from
/// ambient state.
///
/// # Examples
///
/// ```
/// use classpectanator::data;
///
/// let engine = data::canon_engine();
/// let analysis = engine.analyze("Knight", "Time").unwrap();
///
/// assert_eq!(analysis.original_total, -2);
/// assert!(!analysis.balanced);
/// assert!(!analysis.symmetric);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    registry: Registry,
    inverses: InverseConfig,
    characters: CharacterIndex,
}

impl Engine {
    pub fn new(registry: Registry, inverses: InverseConfig) -> Self {
        Engine {
            registry,
            inverses,
            characters: CharacterIndex::new(),
        }
    }

    pub fn with_characters(mut self, characters: CharacterIndex) -> Self {
        self.characters = characters;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn characters(&self) -> &CharacterIndex {
        &self.characters
    }

    /// Analyze one classpect
    ///
    /// The only fatal failure is an input name missing from the registry,
    /// which short-circuits before any further computation. Every derived
    /// lookup miss inside the analysis is recovered locally into an invalid
    /// table row or an omitted transform step.
    pub fn analyze(&self, class_name: &str, aspect_name: &str) -> Result<Analysis, RegistryError> {
        let class_value = self.registry.value_of(EntityKind::Class, class_name)?;
        let aspect_value = self.registry.value_of(EntityKind::Aspect, aspect_name)?;
        let original_total = class_value + aspect_value;

        let class_inverses = self.inverses.tuple_or_empty(EntityKind::Class, class_name);
        let aspect_inverses = self.inverses.tuple_or_empty(EntityKind::Aspect, aspect_name);

        let table = CrossTable::generate(
            &self.registry,
            &class_inverses,
            &aspect_inverses,
            original_total,
        );

        let classpect = Classpect::new(class_name, aspect_name);
        let (canon_characters, non_canon_characters) = self.characters.holders_split(&classpect);

        Ok(Analysis {
            numeric_inverse: table.numeric_inverse(),
            pairwise_inverses: table.pairwise_inverses(),
            siblings: table.siblings(),
            shadows: table.shadows(),
            rotations: transform::rotations(&self.registry, class_value, aspect_value),
            reflection: transform::reflection(&self.registry, class_value, aspect_value),
            same_value: self.classpects_by_total(original_total),
            opposite_value: self.classpects_by_total(-original_total),
            balanced: original_total == 0,
            symmetric: class_value == aspect_value,
            classpect,
            original_total,
            class_inverses,
            aspect_inverses,
            table,
            canon_characters,
            non_canon_characters,
        })
    }

    /// Every classpect whose total equals the target value
    ///
    /// Deterministic order: classes outer, aspects inner, both in registry
    /// insertion order.
    pub fn classpects_by_total(&self, target: i32) -> Vec<Classpect> {
        let mut out = Vec::new();
        for (class, class_value) in self.registry.entries(EntityKind::Class) {
            for (aspect, aspect_value) in self.registry.entries(EntityKind::Aspect) {
                if class_value + aspect_value == target {
                    out.push(Classpect::new(class, aspect));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inverse::InverseTuple;

    fn engine() -> Engine {
        let registry = Registry::from_tables(
            &[("Knight", -3), ("Maid", 1), ("Page", 3)],
            &[("Mind", -3), ("Rage", -1), ("Time", 1), ("Heart", 3)],
        );
        let mut inverses = InverseConfig::new();
        inverses.insert(
            EntityKind::Class,
            "Knight",
            InverseTuple::full("Page", "Page", "Maid", "Page"),
        );
        inverses.insert(
            EntityKind::Aspect,
            "Time",
            InverseTuple::full("Mind", "Heart", "Heart", "Rage"),
        );
        Engine::new(registry, inverses)
    }

    #[test]
    fn test_unknown_input_short_circuits() {
        let err = engine().analyze("Ld", "Time").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownEntity { .. }));
        let err = engine().analyze("Knight", "Tme").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownEntity { .. }));
    }

    #[test]
    fn test_total_and_property_tags() {
        let analysis = engine().analyze("Knight", "Time").unwrap();
        assert_eq!(analysis.original_total, -2);
        assert!(!analysis.balanced);
        assert!(!analysis.symmetric);

        let balanced = engine().analyze("Maid", "Rage").unwrap();
        assert_eq!(balanced.original_total, 0);
        assert!(balanced.balanced);
        assert!(!balanced.symmetric);

        let symmetric = engine().analyze("Maid", "Time").unwrap();
        assert!(symmetric.symmetric);
    }

    #[test]
    fn test_same_value_includes_the_query_itself() {
        let analysis = engine().analyze("Knight", "Time").unwrap();
        assert!(analysis.same_value.contains(&analysis.classpect));
        assert!(!analysis.opposite_value.contains(&analysis.classpect));
    }

    #[test]
    fn test_balanced_classpect_has_identical_value_groups() {
        let analysis = engine().analyze("Maid", "Rage").unwrap();
        assert_eq!(analysis.same_value, analysis.opposite_value);
        assert!(analysis.same_value.contains(&analysis.classpect));
    }

    #[test]
    fn test_entities_without_configured_inverses_still_analyze() {
        // Maid/Rage have no tuples; the table exists but its slot-driven
        // rows are all invalid.
        let analysis = engine().analyze("Maid", "Rage").unwrap();
        assert_eq!(analysis.table.entries.len(), 24);
        assert!(analysis.numeric_inverse.is_none());
        assert!(analysis.pairwise_inverses.is_empty());
        assert!(analysis.siblings.is_empty());
        assert!(analysis.shadows.is_empty());
        // Transforms run off the registry alone, unaffected by the tuples
        assert!(analysis.rotations.len() <= 11);
    }

    #[test]
    fn test_classpects_by_total_order_is_outer_class_inner_aspect() {
        let totals = engine().classpects_by_total(0);
        // Knight(-3)+Heart(3), Maid(1)+Rage(-1), Page(3)+Mind(-3)
        let rendered: Vec<String> = totals.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["Knight of Heart", "Maid of Rage", "Page of Mind"]
        );
    }
}
