//! Error types for squares, board notation and the turn controller.

use thiserror::Error;

use crate::square::Square;

/// Error for malformed square indices, coordinates or notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Square string is not exactly two characters.
    #[error("invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// File character outside a-h.
    #[error("invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Rank character outside 1-8.
    #[error("invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
    /// Cell index outside 0..64.
    #[error("square index {0} is outside 0..64")]
    IndexOutOfRange(usize),
    /// Row or column outside 0..8.
    #[error("coordinate (row {row}, col {col}) is outside the 8x8 board")]
    CoordinateOutOfRange { row: usize, col: usize },
    /// Screen point outside the drawn board.
    #[error("point ({x}, {y}) is outside the {width}x{height} board area")]
    PointOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    /// Board area with a zero-sized side.
    #[error("board area must not be empty")]
    EmptyGeometry,
}

/// Error for the 64-character board notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("board string must have 64 cells, got {0}")]
    InvalidLength(usize),
    #[error("unexpected character '{ch}' at cell {index}")]
    InvalidChar { index: usize, ch: char },
    #[error("side to move must be Black or White")]
    EmptySideToMove,
}

/// Error returned by the turn controller when a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The square is not in the legal move set of the side to move.
    #[error("illegal move: {0}")]
    IllegalMove(Square),
    /// A human move was submitted while the computer is to move.
    #[error("the computer is to move")]
    NotHumanTurn,
    /// A computer move was requested while the human is to move.
    #[error("the human is to move")]
    NotComputerTurn,
    /// A pass was requested while the side to move has a legal move.
    #[error("cannot pass while a legal move exists")]
    PassNotAllowed,
    /// No side has a legal move left.
    #[error("the game is over")]
    GameOver,
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),
}
