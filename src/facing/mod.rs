//! Cluster facing resolution and coordinate normalization.
//!
//! A cluster is a set of unit placements, each carrying its own rotation
//! value with no shared frame. The resolver finds the placement that sits
//! at the cluster origin once its own rotation is undone; that placement's
//! rotation is the cluster's facing. `normalize` then re-expresses every
//! placement in the frame implied by that facing.

use crate::orient::Orientation;

/// One externally supplied unit placement.
///
/// `rotation` is self-contained: it describes the placement's own frame and
/// does not reference any global orientation. Values are reduced modulo 4
/// wherever they are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Own-frame x coordinate.
    pub x: i64,
    /// Vertical coordinate; never touched by facing math.
    pub y: i64,
    /// Own-frame z coordinate.
    pub z: i64,
    /// Unit class label attached by the producer.
    pub class_label: i32,
    /// Rotation index of this placement's own frame.
    pub rotation: u8,
    /// Whether the unit is wall-oriented rather than ground-oriented.
    pub wall_oriented: bool,
}

/// Maps an own-frame coordinate back to the canonical frame by undoing the
/// placement's stored rotation.
///
/// This is the exact inverse of the forward rotation applied by
/// [`rotate`]; composing the two with the same index is the identity on
/// integer coordinates.
pub fn unrotate(x: i64, z: i64, rotation: u8) -> (i64, i64) {
    match rotation % 4 {
        0 => (x, z),
        1 => (-z, x),
        2 => (-x, -z),
        _ => (z, -x),
    }
}

/// Applies the forward rotation for a facing to a canonical coordinate.
pub fn rotate(x: i64, z: i64, facing: Orientation) -> (i64, i64) {
    match facing {
        Orientation::North => (x, z),
        Orientation::West => (z, -x),
        Orientation::South => (-x, -z),
        Orientation::East => (-z, x),
    }
}

/// Determines the aggregate facing of a cluster.
///
/// Scans placements in input order and designates the first whose
/// [`unrotate`]d coordinates are `(0, 0)` as the origin anchor; its
/// rotation modulo 4 is the cluster facing. When several placements
/// satisfy the condition the first in input order wins; the input gives
/// no better signal, so the tie policy is deliberate. Returns `None`
/// when no placement anchors the origin; callers must treat that as
/// "facing undetermined" rather than assuming a default.
pub fn resolve_facing(placements: &[Placement]) -> Option<Orientation> {
    placements
        .iter()
        .find(|p| unrotate(p.x, p.z, p.rotation) == (0, 0))
        .map(|p| Orientation::from_rotation_index(usize::from(p.rotation % 4)))
}

/// Re-expresses every placement's coordinates in the frame implied by
/// `facing`.
///
/// The forward rotation for the facing is applied uniformly to all
/// placements, the origin anchor included; `y`, class label, rotation, and
/// the wall flag pass through untouched.
pub fn normalize(placements: &[Placement], facing: Orientation) -> Vec<Placement> {
    placements
        .iter()
        .map(|p| {
            let (x, z) = rotate(p.x, p.z, facing);
            Placement { x, z, ..*p }
        })
        .collect()
}
