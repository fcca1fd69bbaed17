//! Maps screen coordinates to board squares.
//!
//! The board is drawn as an 8x8 grid filling a `width` x `height` pixel
//! area whose origin is its top-left corner. Columns grow to the right
//! (A to H) and rows grow downwards (1 to 8), matching the square layout.

use crate::error::SquareError;
use crate::square::{BOARD_SIZE, Square};

/// Size of the drawn board in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub width: u32,
    pub height: u32,
}

impl BoardGeometry {
    /// Creates a geometry, rejecting an empty area.
    pub fn new(width: u32, height: u32) -> Result<BoardGeometry, SquareError> {
        if width == 0 || height == 0 {
            return Err(SquareError::EmptyGeometry);
        }
        Ok(BoardGeometry { width, height })
    }

    /// Returns the square under the point `(x, y)`.
    ///
    /// # Errors
    ///
    /// `SquareError::PointOutOfBounds` if the point lies outside the board
    /// area. Points are never clamped onto an edge square.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Square, SquareError> {
        let out_of_bounds = || SquareError::PointOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let col = scale(x, self.width).ok_or_else(out_of_bounds)?;
        let row = scale(y, self.height).ok_or_else(out_of_bounds)?;
        Square::from_row_col(row, col)
    }

    /// Returns the first pixel (top-left) that maps to `sq`.
    pub fn cell_origin(&self, sq: Square) -> (u32, u32) {
        (origin(sq.col(), self.width), origin(sq.row(), self.height))
    }
}

/// Maps `pos` in `0..extent` to a cell index in `0..8`.
fn scale(pos: i32, extent: u32) -> Option<usize> {
    let pos = u32::try_from(pos).ok().filter(|&p| p < extent)?;
    // widened so large areas cannot overflow
    Some((pos as u64 * BOARD_SIZE as u64 / extent as u64) as usize)
}

/// Smallest position whose cell index is `cell`.
fn origin(cell: usize, extent: u32) -> u32 {
    let n = BOARD_SIZE as u64;
    ((cell as u64 * extent as u64).div_ceil(n)) as u32
}
