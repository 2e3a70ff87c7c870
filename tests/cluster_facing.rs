//! Facing resolution and normalization over synthetic placement clusters.

use cloudmatch::facing::rotate;
use cloudmatch::{normalize, resolve_facing, unrotate, Orientation, Placement};
use serde::Deserialize;

fn placement(x: i64, z: i64, rotation: u8) -> Placement {
    Placement {
        x,
        y: 64,
        z,
        class_label: 0,
        rotation,
        wall_oriented: false,
    }
}

#[test]
fn origin_anchor_rotation_becomes_the_cluster_facing() {
    for rotation in 0..4u8 {
        let facing = Orientation::from_rotation_index(usize::from(rotation));
        // The anchor sits at the cluster origin in its own frame; the other
        // members carry canonical offsets pushed through the same rotation.
        let members = [(1i64, 0i64), (2, 3), (-1, 4)];
        let mut placements = vec![placement(0, 0, rotation)];
        for (cx, cz) in members {
            let (x, z) = rotate(cx, cz, facing);
            placements.push(placement(x, z, rotation));
        }

        assert_eq!(resolve_facing(&placements), Some(facing), "rotation {rotation}");
    }
}

#[test]
fn normalize_applies_the_facing_adjustment_uniformly() {
    let placements = vec![placement(0, 0, 1), placement(3, 5, 1), placement(-2, 7, 1)];
    let facing = resolve_facing(&placements).unwrap();
    assert_eq!(facing, Orientation::West);

    let normalized = normalize(&placements, facing);
    // West adjustment is (x, z) -> (z, -x); y and the carried fields pass
    // through untouched.
    assert_eq!(normalized[0].x, 0);
    assert_eq!(normalized[0].z, 0);
    assert_eq!(normalized[1].x, 5);
    assert_eq!(normalized[1].z, -3);
    assert_eq!(normalized[2].x, 7);
    assert_eq!(normalized[2].z, 2);
    for (before, after) in placements.iter().zip(&normalized) {
        assert_eq!(before.y, after.y);
        assert_eq!(before.class_label, after.class_label);
        assert_eq!(before.rotation, after.rotation);
        assert_eq!(before.wall_oriented, after.wall_oriented);
    }
}

#[test]
fn north_facing_normalization_is_the_identity() {
    let placements = vec![placement(0, 0, 0), placement(4, -6, 0)];
    let facing = resolve_facing(&placements).unwrap();
    assert_eq!(facing, Orientation::North);
    assert_eq!(normalize(&placements, facing), placements);
}

#[test]
fn origin_anchor_stays_at_the_origin_for_every_facing() {
    for facing in Orientation::ALL {
        let normalized = normalize(&[placement(0, 0, facing.rotation_index() as u8)], facing);
        assert_eq!((normalized[0].x, normalized[0].z), (0, 0));
    }
}

#[test]
fn first_origin_anchor_wins_ties() {
    // Both placements unrotate to (0, 0) but disagree on rotation; input
    // order decides.
    let placements = vec![placement(0, 0, 2), placement(0, 0, 1)];
    assert_eq!(resolve_facing(&placements), Some(Orientation::South));

    let reversed = vec![placement(0, 0, 1), placement(0, 0, 2)];
    assert_eq!(resolve_facing(&reversed), Some(Orientation::West));
}

#[test]
fn cluster_without_origin_anchor_is_undetermined() {
    let placements = vec![placement(1, 0, 0), placement(0, 2, 3)];
    assert_eq!(resolve_facing(&placements), None);
    assert_eq!(resolve_facing(&[]), None);
}

#[test]
fn non_anchor_origin_candidates_do_not_count() {
    // (2, 0) with rotation 3 unrotates to (0, -2), not the origin; only a
    // true origin anchor may set the facing.
    let placements = vec![placement(2, 0, 3), placement(0, 0, 1)];
    assert_eq!(resolve_facing(&placements), Some(Orientation::West));
}

#[test]
fn unrotate_inverts_every_rotation_index() {
    for rotation in 0..4u8 {
        let facing = Orientation::from_rotation_index(usize::from(rotation));
        let (x, z) = rotate(9, -4, facing);
        assert_eq!(unrotate(x, z, rotation), (9, -4));
    }
}

/// Placement record as produced by the external tooling.
#[derive(Debug, Deserialize)]
struct PlacementRecord {
    x: i64,
    y: i64,
    z: i64,
    class_label: i32,
    rotation: u8,
    wall_oriented: bool,
}

impl From<PlacementRecord> for Placement {
    fn from(value: PlacementRecord) -> Self {
        Placement {
            x: value.x,
            y: value.y,
            z: value.z,
            class_label: value.class_label,
            rotation: value.rotation,
            wall_oriented: value.wall_oriented,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FacingCase {
    name: String,
    placements: Vec<PlacementRecord>,
    expected_facing: Option<String>,
}

const FACING_CASES: &str = r#"[
  {
    "name": "east_facing_wall_cluster",
    "placements": [
      { "x": 0, "y": 70, "z": 0, "class_label": 2, "rotation": 3, "wall_oriented": true },
      { "x": -1, "y": 70, "z": 2, "class_label": 1, "rotation": 3, "wall_oriented": true }
    ],
    "expected_facing": "east"
  },
  {
    "name": "south_facing_mixed_cluster",
    "placements": [
      { "x": 5, "y": 64, "z": -3, "class_label": 0, "rotation": 2, "wall_oriented": false },
      { "x": 0, "y": 64, "z": 0, "class_label": 3, "rotation": 2, "wall_oriented": false }
    ],
    "expected_facing": "south"
  },
  {
    "name": "anchorless_cluster",
    "placements": [
      { "x": 3, "y": 64, "z": 1, "class_label": 0, "rotation": 0, "wall_oriented": false }
    ],
    "expected_facing": null
  }
]"#;

#[test]
fn json_placement_fixtures_resolve_as_annotated() {
    let cases: Vec<FacingCase> = serde_json::from_str(FACING_CASES).unwrap();
    for case in cases {
        let placements: Vec<Placement> = case.placements.into_iter().map(Into::into).collect();
        let facing = resolve_facing(&placements);
        let label = facing.map(|f| f.label().to_string());
        assert_eq!(
            label,
            case.expected_facing,
            "case {}",
            case.name
        );
    }
}
