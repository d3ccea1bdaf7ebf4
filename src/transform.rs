//! Transform Engine
//!
//! Discrete geometric transforms of a classpect's lattice point:
//! - Rotation: 11 candidate steps of 30° (0° and 360° excluded)
//! - Reflection: one diagonal coordinate swap
//!
//! A transform is emitted only when it lands exactly on a registered class
//! value and a registered aspect value; misses are silently omitted.

use crate::registry::{Classpect, EntityKind, Registry};
use serde::{Deserialize, Serialize};

/// One emitted rotation step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: i32,
    pub classpect: Classpect,
}

/// Rotate a lattice point by the given angle around the origin
///
/// Coordinates are rounded with `f64::round`, i.e. half away from zero. For
/// nonzero integer inputs on the 30° grid the pre-rounding coordinates never
/// sit exactly on a half-integer, so the choice only matters for float noise
/// around whole numbers, which `round` absorbs.
///
/// # Examples
///
/// ```
/// use classpectanator::transform::rotate_point;
///
/// assert_eq!(rotate_point(-3, 1, 90), (-1, -3));
/// assert_eq!(rotate_point(-3, 1, 180), (3, -1));
/// assert_eq!(rotate_point(5, 2, 360), (5, 2));
/// ```
pub fn rotate_point(x: i32, y: i32, degrees: i32) -> (i32, i32) {
    let rad = f64::from(degrees).to_radians();
    let (sin, cos) = rad.sin_cos();
    let fx = f64::from(x);
    let fy = f64::from(y);
    let nx = (fx * cos - fy * sin).round() as i32;
    let ny = (fx * sin + fy * cos).round() as i32;
    (nx, ny)
}

/// Every 30° rotation of the point that lands on a registered classpect
///
/// The emitted list is in ascending angle order, holds between 0 and 11
/// entries, and is not guaranteed to be symmetric or evenly spaced: the
/// lattice is sparse and asymmetric, so most angles miss for most points.
pub fn rotations(registry: &Registry, class_value: i32, aspect_value: i32) -> Vec<Rotation> {
    let mut out = Vec::new();
    for step in 1..12 {
        let degrees = step * 30;
        let (nx, ny) = rotate_point(class_value, aspect_value, degrees);
        if let Some(classpect) = classpect_at(registry, nx, ny) {
            out.push(Rotation { degrees, classpect });
        }
    }
    out
}

/// The diagonal reflection of the point, if it lands on a registered classpect
///
/// Swaps the two coordinates: the new class value is the old aspect value and
/// vice versa. The swap is its own inverse, so a successful reflection always
/// reflects back to the original classpect.
pub fn reflection(registry: &Registry, class_value: i32, aspect_value: i32) -> Option<Classpect> {
    classpect_at(registry, aspect_value, class_value)
}

/// Exact lattice hit test: both coordinates must resolve to entities
fn classpect_at(registry: &Registry, class_value: i32, aspect_value: i32) -> Option<Classpect> {
    let class = registry.name_of(EntityKind::Class, class_value).ok()?;
    let aspect = registry.name_of(EntityKind::Aspect, aspect_value).ok()?;
    Some(Classpect::new(class, aspect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::from_tables(
            &[("Knight", -3), ("Sylph", -1), ("Maid", 1), ("Page", 3)],
            &[("Mind", -3), ("Rage", -1), ("Time", 1), ("Heart", 3)],
        )
    }

    #[test]
    fn test_quarter_turns_on_the_grid() {
        // Quarter turns are exact: (x, y) -> (-y, x)
        for &(x, y) in &[(-3, 1), (1, -3), (5, 2), (-7, -6)] {
            assert_eq!(rotate_point(x, y, 90), (-y, x));
            assert_eq!(rotate_point(x, y, 180), (-x, -y));
            assert_eq!(rotate_point(x, y, 270), (y, -x));
        }
    }

    #[test]
    fn test_rotation_emits_only_exact_hits() {
        let registry = registry();
        let rotations = rotations(&registry, -3, 1);

        // 90 deg: (-1, -3) = Sylph of Mind; 180: (3, -1) = Page of Rage;
        // 270: (1, 3) = Maid of Heart. All three are on this lattice.
        let find = |deg: i32| rotations.iter().find(|r| r.degrees == deg);
        assert_eq!(find(90).unwrap().classpect.to_string(), "Sylph of Mind");
        assert_eq!(find(180).unwrap().classpect.to_string(), "Page of Rage");
        assert_eq!(find(270).unwrap().classpect.to_string(), "Maid of Heart");

        assert!(rotations.len() <= 11);
        for window in rotations.windows(2) {
            assert!(window[0].degrees < window[1].degrees);
        }
    }

    #[test]
    fn test_rotation_misses_are_omitted() {
        // A lattice with a single far-off point: every rotation misses.
        let sparse = Registry::from_tables(&[("Muse", 7)], &[("Space", 6)]);
        assert!(rotations(&sparse, 7, 6).is_empty());
    }

    #[test]
    fn test_reflection_round_trips() {
        let registry = registry();
        let reflected = reflection(&registry, -3, 1).unwrap();
        assert_eq!(reflected.to_string(), "Maid of Mind");

        // Maid (1) of Mind (-3) reflects straight back
        let back = reflection(&registry, 1, -3).unwrap();
        assert_eq!(back.to_string(), "Knight of Time");
    }

    #[test]
    fn test_reflection_requires_both_coordinates_to_resolve() {
        // Aspect value 5 exists for no class here, so the swap misses.
        let registry = Registry::from_tables(&[("Bard", 5)], &[("Void", 5), ("Time", 1)]);
        assert!(reflection(&registry, 5, 1).is_none());
        assert!(reflection(&registry, 5, 5).is_some());
    }
}
