//! CloudMatch locates binary/wildcard patterns in a periodic boolean
//! reference grid under all four axis-aligned rotations.
//!
//! The crate bundles three independent pure kernels that share one rotation
//! vocabulary: the rotational [`Matcher`], the periodic coordinate
//! enumeration in [`coords`], and the cluster facing resolver in
//! [`facing`]. Optional parallelism over the four rotation scans is
//! available via the `rayon` feature.

pub mod coords;
pub mod facing;
pub mod grid;
pub mod orient;
pub mod pattern;
pub mod search;
mod trace;
pub mod util;

pub use coords::{valid_coordinates, Granularity};
pub use facing::{normalize, resolve_facing, unrotate, Placement};
pub use grid::Grid;
pub use orient::{variant_orientation, Orientation};
pub use pattern::{Cell, Pattern};
pub use search::{
    MatchRecord, Matcher, RotationMatches, SearchConfig, SearchOutcome, SearchReport,
    DEFAULT_MATCH_CAP,
};
pub use util::{CloudMatchError, CloudMatchResult};
