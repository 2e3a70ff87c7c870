//! Dense toroidal scan of one rotation variant.

use crate::grid::Grid;
use crate::pattern::{Cell, Pattern};
use crate::search::MatchRecord;

/// Scans every anchor position of the grid for one rotation variant.
///
/// The anchor `(x, y)` aligns the variant's top-left cell with grid cell
/// `(y, x)`; pattern cell `(i, j)` is compared against grid cell
/// `((y + i) mod height, (x + j) mod width)`, so the variant wraps across
/// the grid edges. Comparison walks row-major and bails on the first
/// non-wildcard cell whose value differs. Anchors come out in scan order:
/// `y` ascending, then `x` ascending.
pub(crate) fn scan_rotation(grid: &Grid, variant: &Pattern, rotation: usize) -> Vec<MatchRecord> {
    let mut anchors = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if anchor_matches(grid, variant, x, y) {
                anchors.push(MatchRecord { rotation, x, y });
            }
        }
    }
    anchors
}

fn anchor_matches(grid: &Grid, variant: &Pattern, x: usize, y: usize) -> bool {
    for i in 0..variant.height() {
        for j in 0..variant.width() {
            let cell = variant.at(i, j);
            if matches!(cell, Cell::Wildcard) {
                continue;
            }
            if !cell.accepts(grid.get_wrapped(y + i, x + j)) {
                return false;
            }
        }
    }
    true
}
