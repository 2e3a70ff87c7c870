//! Rotational pattern search over the reference grid.
//!
//! [`Matcher`] owns the reference [`Grid`] and runs the toroidal,
//! wildcard-aware scan for all four rotation variants of a query pattern.
//! The four per-rotation scans are independent pure computations; with the
//! `rayon` feature and [`SearchConfig::parallel`] they run one task per
//! rotation, and the results are reassembled into fixed rotation order
//! either way.

pub(crate) mod scan;

use crate::grid::Grid;
use crate::orient::{variant_orientation, Orientation};
use crate::pattern::Pattern;
use crate::trace::{trace_event, trace_span};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Default cap on the total number of reported matches.
pub const DEFAULT_MATCH_CAP: usize = 150;

/// Search configuration.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum total matches across all rotations before the outcome
    /// degrades to [`SearchOutcome::TooManyMatches`]. The cap gates
    /// reporting only; the scan always runs to completion.
    pub match_cap: usize,
    /// Run the four per-rotation scans in parallel. Only effective with the
    /// `rayon` feature; without it the serial driver is used regardless.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_cap: DEFAULT_MATCH_CAP,
            parallel: false,
        }
    }
}

/// One anchor position where a rotation variant matched.
///
/// `x` and `y` are the grid coordinates of the cell the variant's top-left
/// cell aligned with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Rotation index of the variant that matched, `0..4`.
    pub rotation: usize,
    /// Anchor column.
    pub x: usize,
    /// Anchor row.
    pub y: usize,
}

/// All matches for one rotation variant.
#[derive(Clone, Debug)]
pub struct RotationMatches {
    /// Rotation index, `0..4`.
    pub rotation: usize,
    /// The rotated pattern that was scanned.
    pub pattern: Pattern,
    /// How the input pattern relates to this variant, `None` when no
    /// rotation of the input reproduces it exactly.
    pub orientation: Option<Orientation>,
    /// Anchors in scan order: `y` ascending, then `x` ascending.
    pub anchors: Vec<MatchRecord>,
}

/// Full search result: the four rotation variants and their matches, in
/// fixed rotation-index order.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Per-rotation results, indexed by rotation.
    pub rotations: [RotationMatches; 4],
}

impl SearchReport {
    /// Returns the total number of matches across all rotations.
    pub fn total_matches(&self) -> usize {
        self.rotations.iter().map(|r| r.anchors.len()).sum()
    }

    /// Iterates all matches in rotation order, then scan order.
    pub fn iter_matches(&self) -> impl Iterator<Item = &MatchRecord> {
        self.rotations.iter().flat_map(|r| r.anchors.iter())
    }
}

/// Outcome of a search.
///
/// Zero matches and an over-cap total are ordinary outcomes, not errors;
/// both mean the scan completed. `TooManyMatches` still carries the fully
/// computed report so callers can inspect what was found.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// At least one match, within the cap.
    Found(SearchReport),
    /// The scan completed and found no anchor in any rotation.
    NoMatch,
    /// The total match count exceeded [`SearchConfig::match_cap`].
    TooManyMatches(SearchReport),
}

/// Pattern matcher over an immutable reference grid.
///
/// The grid is loaded once per reference-dataset version; a `Matcher` can
/// then serve any number of searches, concurrently if desired, since every
/// call operates only on its own inputs.
pub struct Matcher {
    grid: Grid,
    cfg: SearchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cfg: SearchConfig::default(),
        }
    }

    /// Replaces the search configuration.
    pub fn with_config(mut self, cfg: SearchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the reference grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Searches the grid for all four rotations of `pattern`.
    ///
    /// For each rotation variant the anchor slides over every grid cell;
    /// pattern cells are compared against the grid with toroidal wrapping,
    /// so a variant larger than the grid can still match by straddling the
    /// edges. Anchors are reported in `y`-then-`x` ascending order per
    /// rotation, making output deterministic.
    pub fn search(&self, pattern: &Pattern) -> SearchOutcome {
        let _span = trace_span!(
            "pattern_search",
            grid_w = self.grid.width(),
            grid_h = self.grid.height(),
            pattern_w = pattern.width(),
            pattern_h = pattern.height(),
        )
        .entered();

        let variants = pattern.rotations();

        #[cfg(feature = "rayon")]
        let report = if self.cfg.parallel {
            self.scan_variants_par(pattern, variants)
        } else {
            self.scan_variants(pattern, variants)
        };
        #[cfg(not(feature = "rayon"))]
        let report = self.scan_variants(pattern, variants);

        let total = report.total_matches();
        trace_event!("search_done", total = total);

        if total == 0 {
            SearchOutcome::NoMatch
        } else if total > self.cfg.match_cap {
            SearchOutcome::TooManyMatches(report)
        } else {
            SearchOutcome::Found(report)
        }
    }

    fn scan_variants(&self, input: &Pattern, variants: [Pattern; 4]) -> SearchReport {
        let rotations: Vec<RotationMatches> = variants
            .into_iter()
            .enumerate()
            .map(|(rotation, variant)| self.scan_one(input, rotation, variant))
            .collect();
        SearchReport {
            rotations: rotations.try_into().expect("exactly four rotations"),
        }
    }

    #[cfg(feature = "rayon")]
    fn scan_variants_par(&self, input: &Pattern, variants: [Pattern; 4]) -> SearchReport {
        // Indexed parallel iteration keeps the collected order equal to the
        // rotation order, whatever order the tasks finish in.
        let rotations: Vec<RotationMatches> = variants
            .into_par_iter()
            .enumerate()
            .map(|(rotation, variant)| self.scan_one(input, rotation, variant))
            .collect();
        SearchReport {
            rotations: rotations.try_into().expect("exactly four rotations"),
        }
    }

    fn scan_one(&self, input: &Pattern, rotation: usize, variant: Pattern) -> RotationMatches {
        let anchors = scan::scan_rotation(&self.grid, &variant, rotation);
        let orientation = variant_orientation(input, &variant);
        RotationMatches {
            rotation,
            pattern: variant,
            orientation,
            anchors,
        }
    }
}
