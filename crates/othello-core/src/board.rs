//! Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::disc::Disc;
use crate::error::BoardParseError;
use crate::flip;
use crate::square::{Square, TOTAL_SQUARES};
use crate::types::Score;

/// Represents an Othello board with bitboards for the player and opponent.
///
/// `player` holds the discs of the side to move and `opponent` the discs of
/// the other side. The two sets never overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Bitboard representing the player's discs.
    pub player: Bitboard,
    /// Bitboard representing the opponent's discs.
    pub opponent: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Black discs on D5 and E4
    /// - White discs on D4 and E5
    ///
    /// Black moves first, so Black is the player.
    fn default() -> Self {
        Board {
            player: Square::D5.bitboard() | Square::E4.bitboard(),
            opponent: Square::D4.bitboard() | Square::E5.bitboard(),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` from given bitboards.
    ///
    /// # Arguments
    /// * `player` - Bitboard representing the player's discs.
    /// * `opponent` - Bitboard representing the opponent's discs.
    ///
    /// # Returns
    /// A new `Board` instance.
    pub fn from_bitboards(player: impl Into<Bitboard>, opponent: impl Into<Bitboard>) -> Board {
        let board = Board {
            player: player.into(),
            opponent: opponent.into(),
        };
        debug_assert!(board.is_consistent(), "player and opponent overlap");
        board
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string contains 64 cells from A1 to H8; whitespace is ignored so
    /// the board may be written one row per line. Cells are `X` (Black),
    /// `O` (White) or `-` (empty); see [`Disc::from_char`] for the accepted
    /// aliases.
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    /// * `side_to_move` - The color whose discs become `player`.
    ///
    /// # Returns
    /// The board, or a `BoardParseError` describing the first problem found.
    pub fn from_string(board_string: &str, side_to_move: Disc) -> Result<Board, BoardParseError> {
        if side_to_move == Disc::Empty {
            return Err(BoardParseError::EmptySideToMove);
        }

        let cells: Vec<char> = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if cells.len() != TOTAL_SQUARES {
            return Err(BoardParseError::InvalidLength(cells.len()));
        }

        let mut player = Bitboard::new(0);
        let mut opponent = Bitboard::new(0);
        for (index, &ch) in cells.iter().enumerate() {
            let sq = Square::from_usize_unchecked(index);
            match Disc::from_char(ch) {
                Some(Disc::Empty) => {}
                Some(disc) if disc == side_to_move => player = player.set(sq),
                Some(_) => opponent = opponent.set(sq),
                None => return Err(BoardParseError::InvalidChar { index, ch }),
            }
        }
        Ok(Board { player, opponent })
    }

    /// Checks the disjointness invariant.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        (self.player & self.opponent).is_empty()
    }

    /// Gets the disc at a specific square from the perspective of the current player.
    ///
    /// # Arguments
    /// * `sq` - The square to check.
    /// * `side_to_move` - The current player's disc.
    ///
    /// # Returns
    /// The disc at the specified square (current player's disc, opponent's disc, or empty).
    #[inline]
    pub fn get_disc_at(&self, sq: Square, side_to_move: Disc) -> Disc {
        if self.player.contains(sq) {
            side_to_move
        } else if self.opponent.contains(sq) {
            side_to_move.opposite()
        } else {
            Disc::Empty
        }
    }

    /// Checks if the game is over (neither player can make a move).
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves() && !self.switch_players().has_legal_moves()
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        !(self.player | self.opponent)
    }

    /// Returns the number of discs the current player has on the board.
    #[inline(always)]
    pub fn get_player_count(&self) -> u32 {
        self.player.count()
    }

    /// Returns the number of discs the opponent has on the board.
    #[inline(always)]
    pub fn get_opponent_count(&self) -> u32 {
        self.opponent.count()
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn get_empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Returns the number of discs on the board.
    #[inline(always)]
    pub fn get_disc_count(&self) -> u32 {
        (self.player | self.opponent).count()
    }

    /// Returns the disc difference (player minus opponent).
    #[inline(always)]
    pub fn disc_difference(&self) -> Score {
        self.get_player_count() as Score - self.get_opponent_count() as Score
    }

    /// Switches the players.
    ///
    /// Used for passes: the board does not change, only the side to move.
    #[inline(always)]
    pub fn switch_players(&self) -> Board {
        Board {
            player: self.opponent,
            opponent: self.player,
        }
    }

    /// Attempts to make a move for the current player.
    ///
    /// # Arguments
    /// * `sq` - The square where the player is attempting to place a disc.
    ///
    /// # Returns
    /// `Some(Board)` with the updated board if the move is legal, `None` otherwise.
    #[inline]
    pub fn try_make_move(&self, sq: Square) -> Option<Board> {
        if !self.is_square_empty(sq) {
            return None;
        }

        let flipped = flip::flip(sq, self.player, self.opponent);
        if flipped.is_empty() {
            return None;
        }

        Some(self.make_move_with_flipped(flipped, sq))
    }

    /// Makes a move for the current player.
    ///
    /// The returned board is seen from the next side to move: its `opponent`
    /// holds the mover's discs after the captures and its `player` holds what
    /// is left of the other side.
    ///
    /// The move must be legal; callers validate it first (see
    /// [`Board::is_legal_move`] or [`Board::try_make_move`]).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the move is illegal.
    #[inline(always)]
    pub fn make_move(&self, sq: Square) -> Board {
        let flipped = flip::flip(sq, self.player, self.opponent);
        debug_assert!(
            self.is_square_empty(sq) && !flipped.is_empty(),
            "illegal move {sq}"
        );
        self.make_move_with_flipped(flipped, sq)
    }

    /// Makes a move for the current player, given the already calculated flipped discs.
    ///
    /// # Arguments
    /// * `flipped` - The bitboard representing the discs flipped by the move.
    /// * `sq` - The square where the player is placing a disc.
    ///
    /// # Returns
    /// A new `Board` instance with the updated board state after the move.
    #[inline(always)]
    pub fn make_move_with_flipped(&self, flipped: Bitboard, sq: Square) -> Board {
        Board {
            player: self.opponent.apply_flip(flipped),
            opponent: self.player.apply_move(flipped, sq),
        }
    }

    /// Returns a bitboard representing the legal moves for the current player.
    #[inline(always)]
    pub fn get_moves(&self) -> Bitboard {
        self.player.get_moves(self.opponent)
    }

    /// Checks if the current player has any legal moves.
    #[inline(always)]
    pub fn has_legal_moves(&self) -> bool {
        !self.get_moves().is_empty()
    }

    /// Checks if a move to a specific square is legal for the current player.
    #[inline(always)]
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.get_moves().contains(sq)
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get_empty().contains(sq)
    }

    /// Converts the board to a string representation.
    ///
    /// The output is an 8x8 grid, row 1 first, with `X` for Black, `O` for
    /// White and `-` for empty squares.
    ///
    /// # Arguments
    /// * `current_player` - The color of `player`.
    pub fn to_string_as_board(&self, current_player: Disc) -> String {
        let mut s = String::with_capacity(TOTAL_SQUARES + 8);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                s.push('\n');
            }
            s.push(self.get_disc_at(sq, current_player).to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    /// Formats the board for display, showing Black as the current player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board(Disc::Black))
    }
}
