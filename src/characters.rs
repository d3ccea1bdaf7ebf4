//! Character associations
//!
//! Static mapping from character names to the classpect they hold, split into
//! canon and non-canon rosters. Supplied as configuration alongside the
//! registry; the engine only ever queries it by classpect.

use crate::registry::Classpect;
use serde::{Deserialize, Serialize};

/// One character and the classpect they hold
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub classpect: Classpect,
    /// Display color, as a hex string
    pub color: String,
    pub canon: bool,
}

/// Lookup index over a character roster, preserving insertion order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterIndex {
    entries: Vec<Character>,
}

impl CharacterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, character: Character) {
        self.entries.push(character);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A character by exact name
    pub fn find(&self, name: &str) -> Option<&Character> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// All characters holding the given classpect, in insertion order
    pub fn holders<'a>(
        &'a self,
        classpect: &'a Classpect,
    ) -> impl Iterator<Item = &'a Character> + 'a {
        self.entries.iter().filter(move |c| c.classpect == *classpect)
    }

    /// Holders of the classpect split into (canon, non-canon) rosters
    pub fn holders_split(&self, classpect: &Classpect) -> (Vec<Character>, Vec<Character>) {
        let mut canon = Vec::new();
        let mut non_canon = Vec::new();
        for character in self.holders(classpect) {
            if character.canon {
                canon.push(character.clone());
            } else {
                non_canon.push(character.clone());
            }
        }
        (canon, non_canon)
    }
}
