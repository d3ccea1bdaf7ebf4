//! Bundled canonical dataset
//!
//! The extended zodiac lattice: 14 classes on values −7..−1 ∪ 1..7 and 12
//! aspects on −6..−1 ∪ 1..6, the canonical pair relation for both kinds, and
//! the canon character roster. The engine itself consumes any registry and
//! inverse configuration; this module just constructs the shipped one.

use crate::analysis::Engine;
use crate::characters::{Character, CharacterIndex};
use crate::inverse::{InverseConfig, InverseTuple};
use crate::registry::{Classpect, EntityKind, Registry, RegistryError};

/// Class names and lattice values, one per value in −7..7 without 0
pub const CLASSES: [(&str, i32); 14] = [
    ("Lord", -7),
    ("Witch", -6),
    ("Prince", -5),
    ("Thief", -4),
    ("Knight", -3),
    ("Mage", -2),
    ("Sylph", -1),
    ("Maid", 1),
    ("Seer", 2),
    ("Page", 3),
    ("Rogue", 4),
    ("Bard", 5),
    ("Heir", 6),
    ("Muse", 7),
];

/// Aspect names and lattice values, one per value in −6..6 without 0
pub const ASPECTS: [(&str, i32); 12] = [
    ("Hope", -6),
    ("Light", -5),
    ("Life", -4),
    ("Mind", -3),
    ("Breath", -2),
    ("Rage", -1),
    ("Time", 1),
    ("Blood", 2),
    ("Heart", 3),
    ("Doom", 4),
    ("Void", 5),
    ("Space", 6),
];

/// Canonical class pairing (symmetric)
const CLASS_PAIRS: [(&str, &str); 7] = [
    ("Maid", "Bard"),
    ("Page", "Thief"),
    ("Mage", "Heir"),
    ("Knight", "Rogue"),
    ("Sylph", "Prince"),
    ("Seer", "Witch"),
    ("Muse", "Lord"),
];

/// Canonical aspect pairing (symmetric)
const ASPECT_PAIRS: [(&str, &str); 6] = [
    ("Time", "Space"),
    ("Light", "Void"),
    ("Hope", "Rage"),
    ("Breath", "Blood"),
    ("Life", "Doom"),
    ("Heart", "Mind"),
];

/// Canon characters: (name, class, aspect, display color)
const CHARACTERS: [(&str, &str, &str, &str); 22] = [
    ("John Egbert", "Heir", "Breath", "#0715cd"),
    ("Rose Lalonde", "Seer", "Light", "#b536da"),
    ("Dave Strider", "Knight", "Time", "#e00707"),
    ("Jade Harley", "Witch", "Space", "#4ac925"),
    ("Jane Crocker", "Maid", "Life", "#00d5f2"),
    ("Roxy Lalonde", "Rogue", "Void", "#ff6ff2"),
    ("Dirk Strider", "Prince", "Heart", "#f2a400"),
    ("Jake English", "Page", "Hope", "#1f9400"),
    ("Aradia Megido", "Maid", "Time", "#a10000"),
    ("Tavros Nitram", "Page", "Breath", "#a15000"),
    ("Sollux Captor", "Mage", "Doom", "#a1a100"),
    ("Karkat Vantas", "Knight", "Blood", "#626262"),
    ("Nepeta Leijon", "Rogue", "Heart", "#416600"),
    ("Kanaya Maryam", "Sylph", "Space", "#008141"),
    ("Terezi Pyrope", "Seer", "Mind", "#008282"),
    ("Vriska Serket", "Thief", "Light", "#005682"),
    ("Equius Zahhak", "Heir", "Void", "#000056"),
    ("Gamzee Makara", "Bard", "Rage", "#2b0057"),
    ("Eridan Ampora", "Prince", "Hope", "#6a006a"),
    ("Feferi Peixes", "Witch", "Life", "#77003c"),
    ("Calliope", "Muse", "Space", "#929292"),
    ("Caliborn", "Lord", "Time", "#323232"),
];

/// The canonical registry
pub fn canon_registry() -> Registry {
    Registry::from_tables(&CLASSES, &ASPECTS)
}

fn pair_of<'a>(pairs: &[(&'a str, &'a str)], name: &str) -> Option<&'a str> {
    pairs.iter().find_map(|&(a, b)| {
        if a == name {
            Some(b)
        } else if b == name {
            Some(a)
        } else {
            None
        }
    })
}

/// Derive one kind's inverse tuples from its pair relation and the registry
///
/// Slot layout per entity E with value v:
/// - Pair: pair(E)
/// - Quasipair: the entity valued −value(pair(E))
/// - Antipair: pair of the entity valued −v
/// - Numeric: the entity valued −v
fn derive_tuples(
    registry: &Registry,
    kind: EntityKind,
    pairs: &[(&str, &str)],
    config: &mut InverseConfig,
) -> Result<(), RegistryError> {
    let names: Vec<String> = registry.names(kind).map(str::to_string).collect();
    for name in names {
        let value = registry.value_of(kind, &name)?;
        let numeric = registry.name_of(kind, -value)?.to_string();
        let pair = pair_of(pairs, &name).ok_or_else(|| RegistryError::UnknownEntity {
            kind,
            name: name.clone(),
        })?;
        let pair_value = registry.value_of(kind, pair)?;
        let quasipair = registry.name_of(kind, -pair_value)?.to_string();
        let antipair = pair_of(pairs, &numeric).ok_or_else(|| RegistryError::UnknownEntity {
            kind,
            name: numeric.clone(),
        })?;
        config.insert(kind, name, InverseTuple::full(pair, quasipair, antipair, numeric));
    }
    Ok(())
}

/// The canonical inverse configuration
pub fn canon_inverses() -> InverseConfig {
    let registry = canon_registry();
    let mut config = InverseConfig::new();
    derive_tuples(&registry, EntityKind::Class, &CLASS_PAIRS, &mut config)
        .expect("canon class table is closed under pairing and negation");
    derive_tuples(&registry, EntityKind::Aspect, &ASPECT_PAIRS, &mut config)
        .expect("canon aspect table is closed under pairing and negation");
    config
}

/// The canon character roster
pub fn canon_characters() -> CharacterIndex {
    let mut index = CharacterIndex::new();
    for (name, class, aspect, color) in CHARACTERS {
        index.push(Character {
            name: name.to_string(),
            classpect: Classpect::new(class, aspect),
            color: color.to_string(),
            canon: true,
        });
    }
    index
}

/// An engine over the full canonical dataset
///
/// # Examples
///
/// ```
/// use classpectanator::data;
///
/// let engine = data::canon_engine();
/// let analysis = engine.analyze("Maid", "Rage").unwrap();
/// assert!(analysis.balanced);
/// ```
pub fn canon_engine() -> Engine {
    Engine::new(canon_registry(), canon_inverses()).with_characters(canon_characters())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inverse::InverseKind;

    #[test]
    fn test_canon_registry_is_a_bijection_without_zero() {
        let registry = canon_registry();
        for (kind, count, max) in [(EntityKind::Class, 14, 7), (EntityKind::Aspect, 12, 6)] {
            assert_eq!(registry.len(kind), count);
            let mut values: Vec<i32> = registry.entries(kind).map(|(_, v)| v).collect();
            values.sort_unstable();
            let expected: Vec<i32> = (-max..=max).filter(|&v| v != 0).collect();
            assert_eq!(values, expected);
            for (name, value) in registry.entries(kind) {
                assert_eq!(registry.name_of(kind, value).unwrap(), name);
            }
        }
    }

    #[test]
    fn test_every_canon_tuple_slot_resolves() {
        let registry = canon_registry();
        let config = canon_inverses();
        for kind in [EntityKind::Class, EntityKind::Aspect] {
            for name in registry.names(kind) {
                let tuple = config.get(kind, name).unwrap();
                for slot in InverseKind::ALL {
                    let target = tuple.get(slot).unwrap();
                    assert!(registry.contains(kind, target), "{name}/{slot} -> {target}");
                }
            }
        }
    }

    #[test]
    fn test_canon_pairing_is_symmetric() {
        let config = canon_inverses();
        let check = |kind: EntityKind, registry: &Registry| {
            for name in registry.names(kind) {
                let pair = config.get(kind, name).unwrap().pair.clone().unwrap();
                let back = config.get(kind, &pair).unwrap().pair.clone().unwrap();
                assert_eq!(back, name);
            }
        };
        let registry = canon_registry();
        check(EntityKind::Class, &registry);
        check(EntityKind::Aspect, &registry);
    }

    #[test]
    fn test_knight_tuple() {
        let config = canon_inverses();
        let knight = config.get(EntityKind::Class, "Knight").unwrap();
        // Pair Rogue (4); Quasipair: −4 = Thief; Antipair: pair(Page) = Thief;
        // Numeric: −(−3) = Page
        assert_eq!(knight, &InverseTuple::full("Rogue", "Thief", "Thief", "Page"));
    }

    #[test]
    fn test_every_canon_character_holds_a_registered_classpect() {
        let registry = canon_registry();
        let roster = canon_characters();
        assert_eq!(roster.len(), 22);
        let dave = roster.find("Dave Strider").unwrap();
        assert_eq!(dave.classpect.to_string(), "Knight of Time");
        for name in CHARACTERS.iter().map(|&(n, _, _, _)| n) {
            let character = roster.find(name).unwrap();
            assert!(registry.contains(EntityKind::Class, &character.classpect.class));
            assert!(registry.contains(EntityKind::Aspect, &character.classpect.aspect));
        }
    }
}
