//! The shared 90-degree rotation primitive.
//!
//! Rotation is clockwise: destination cell `(row, col)` of the rotated
//! pattern reads source cell `(h - 1 - col, row)`, where `h` is the source
//! height. A `w x h` pattern therefore becomes `h x w`, and four successive
//! rotations reproduce the original exactly. Both the matcher's variant
//! generation and the orientation report are built on this one function, so
//! the cyclic order of rotation indices is identical everywhere.

use crate::pattern::Pattern;

/// Rotates a pattern 90 degrees clockwise.
pub fn rotate_cw(pattern: &Pattern) -> Pattern {
    let src_width = pattern.width();
    let src_height = pattern.height();
    // Rotated dimensions swap: width becomes height and vice versa.
    let mut cells = Vec::with_capacity(src_width * src_height);
    for row in 0..src_width {
        for col in 0..src_height {
            cells.push(pattern.at(src_height - 1 - col, row));
        }
    }
    Pattern::new(cells, src_height, src_width).expect("rotation preserves cell count")
}

/// Generates the four rotation variants in cyclic order.
///
/// Variant 0 is a clone of the input; each subsequent variant rotates the
/// previous one once more.
pub fn rotations(pattern: &Pattern) -> [Pattern; 4] {
    let r0 = pattern.clone();
    let r1 = rotate_cw(&r0);
    let r2 = rotate_cw(&r1);
    let r3 = rotate_cw(&r2);
    [r0, r1, r2, r3]
}
