//! The four-label orientation vocabulary.
//!
//! Rotation indices `0..4` map to compass labels in a fixed cyclic order:
//! `0 = north`, `1 = west`, `2 = south`, `3 = east`. The matcher uses the
//! labels to describe how the input pattern relates to a matched rotation
//! variant, and the facing resolver uses them for a cluster's aggregate
//! facing. Both meanings share this one type so a rotation index is never
//! interpreted two different ways.

use std::fmt;

use crate::pattern::Pattern;

/// Canonical facing label for a rotation index modulo 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rotation index 0, the identity.
    North,
    /// Rotation index 1, one clockwise step.
    West,
    /// Rotation index 2, a half turn.
    South,
    /// Rotation index 3, three clockwise steps.
    East,
}

impl Orientation {
    /// All orientations in rotation-index order.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::West,
        Orientation::South,
        Orientation::East,
    ];

    /// Returns the orientation for a rotation index, reduced modulo 4.
    pub fn from_rotation_index(index: usize) -> Orientation {
        Self::ALL[index % 4]
    }

    /// Returns the rotation index for this orientation.
    pub fn rotation_index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::West => 1,
            Orientation::South => 2,
            Orientation::East => 3,
        }
    }

    /// Returns the lowercase label used in human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::West => "west",
            Orientation::South => "south",
            Orientation::East => "east",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Determines how `input` relates to one of its rotation `variant`s.
///
/// Rotates `input` zero to three times and tests exact equality against
/// `variant` at each step; the first rotation index that matches yields the
/// orientation label. Equality here is literal tri-state equality, so a
/// wildcard cell only matches a wildcard cell. For a pattern with rotational
/// symmetry the earliest index wins, which is why a fully symmetric pattern
/// always reports north. Returns `None` when no rotation matches, which a
/// consistent rotation generator never produces but which callers must
/// still surface as an unknown orientation rather than a panic.
pub fn variant_orientation(input: &Pattern, variant: &Pattern) -> Option<Orientation> {
    let mut current = input.clone();
    for index in 0..4 {
        if current == *variant {
            return Some(Orientation::from_rotation_index(index));
        }
        current = current.rotate_cw();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{variant_orientation, Orientation};
    use crate::pattern::Pattern;

    #[test]
    fn labels_follow_rotation_index_order() {
        assert_eq!(Orientation::from_rotation_index(0).label(), "north");
        assert_eq!(Orientation::from_rotation_index(1).label(), "west");
        assert_eq!(Orientation::from_rotation_index(2).label(), "south");
        assert_eq!(Orientation::from_rotation_index(3).label(), "east");
        assert_eq!(Orientation::from_rotation_index(7).label(), "east");
    }

    #[test]
    fn asymmetric_pattern_reports_each_variant() {
        let input = Pattern::parse("10\n00\n00").unwrap();
        let variants = input.rotations();
        for (index, variant) in variants.iter().enumerate() {
            assert_eq!(
                variant_orientation(&input, variant),
                Some(Orientation::from_rotation_index(index))
            );
        }
    }

    #[test]
    fn symmetric_pattern_reports_earliest_index() {
        // 180-degree symmetric: variant 2 equals variant 0.
        let input = Pattern::parse("10\n01").unwrap();
        let variants = input.rotations();
        assert_eq!(
            variant_orientation(&input, &variants[2]),
            Some(Orientation::North)
        );
    }

    #[test]
    fn wildcard_cells_compare_literally() {
        let with_wildcard = Pattern::parse("1?").unwrap();
        let with_unset = Pattern::parse("10").unwrap();
        assert_eq!(variant_orientation(&with_wildcard, &with_unset), None);
    }
}
