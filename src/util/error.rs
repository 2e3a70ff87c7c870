//! Error types for cloudmatch.

use thiserror::Error;

/// Result alias for cloudmatch operations.
pub type CloudMatchResult<T> = std::result::Result<T, CloudMatchError>;

/// Errors raised while constructing grids and patterns.
///
/// These are all construction-time failures: once a [`Grid`](crate::Grid)
/// or [`Pattern`](crate::Pattern) exists, searching it cannot fail. Zero
/// matches and over-cap totals are reported through
/// [`SearchOutcome`](crate::SearchOutcome), not through this enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloudMatchError {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
    /// The cell buffer is shorter than `width * height`.
    #[error("cell buffer too small: needed {needed}, got {got}")]
    BufferTooSmall {
        /// Required element count.
        needed: usize,
        /// Provided element count.
        got: usize,
    },
    /// A text row differs in length from the first row.
    #[error("ragged row {row}: expected {expected} cells, got {got}")]
    RaggedRow {
        /// Zero-based row index of the offending line.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
    /// A character outside the recognized alphabet was encountered.
    #[error("unrecognized symbol {symbol:?} at row {row}, column {column}")]
    UnrecognizedSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
}
