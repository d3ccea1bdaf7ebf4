//! Classpectanator - Classpect Symmetry Analysis Engine
//!
//! Copyright (c) 2026 Classpectanator Contributors
//! Licensed under MIT License
//!
//! Pure, synchronous analysis engine for the extended zodiac lattice: every
//! (class, aspect) pair is a point on a small 2D integer lattice, and the
//! engine computes the closed set of algebraic/geometric relationships
//! between classpects (inversions, siblings, shadows, rotations, reflection,
//! total-value equivalence classes).

pub mod analysis;
pub mod characters;
pub mod cli;
pub mod data;
pub mod inverse;
pub mod registry;
pub mod table;
pub mod transform;

// Re-export main types for convenience
pub use analysis::{Analysis, Engine};
pub use characters::{Character, CharacterIndex};
pub use inverse::{InverseConfig, InverseKind, InverseTuple};
pub use registry::{Classpect, EntityKind, Registry, RegistryError};
pub use table::{AspectRule, CrossTable, TableEntry};
pub use transform::Rotation;
