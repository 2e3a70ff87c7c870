//! The boolean reference grid.
//!
//! A [`Grid`] is an immutable `height x width` array of boolean cells backed
//! by a flat row-major buffer. It is logically toroidal: the matcher wraps
//! row and column indices modulo the grid dimensions, so opposite edges are
//! adjacent. The grid is loaded once per reference-dataset version and is
//! read-only thereafter.

use crate::util::{CloudMatchError, CloudMatchResult};

/// Immutable boolean grid with toroidal addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid from a flat row-major buffer.
    ///
    /// The buffer must hold at least `width * height` cells; both
    /// dimensions must be non-zero.
    pub fn new(cells: Vec<bool>, width: usize, height: usize) -> CloudMatchResult<Self> {
        if width == 0 || height == 0 {
            return Err(CloudMatchError::InvalidDimensions { width, height });
        }
        let needed = width * height;
        if cells.len() < needed {
            return Err(CloudMatchError::BufferTooSmall {
                needed,
                got: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parses a grid from its text form: one line per row, `'1'` for a set
    /// cell and `'0'` for an unset one, all lines the same length.
    ///
    /// Surrounding whitespace is trimmed and per-line trailing `'\r'` is
    /// dropped, so files with either line convention load unchanged. A
    /// blank line between rows is a ragged row, not a separator.
    pub fn parse(text: &str) -> CloudMatchResult<Self> {
        let lines: Vec<&str> = text
            .trim()
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if height == 0 || width == 0 {
            return Err(CloudMatchError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(CloudMatchError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                match symbol {
                    '1' => cells.push(true),
                    '0' => cells.push(false),
                    _ => {
                        return Err(CloudMatchError::UnrecognizedSymbol {
                            symbol,
                            row,
                            column,
                        })
                    }
                }
            }
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(row, col)` without wrapping.
    ///
    /// Both indices must be in bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Returns the cell at `(row, col)` with toroidal wrapping.
    ///
    /// Indices of any magnitude are valid; they wrap modulo the grid
    /// dimensions.
    pub fn get_wrapped(&self, row: usize, col: usize) -> bool {
        self.get(row % self.height, col % self.width)
    }
}
