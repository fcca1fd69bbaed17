//! Game record for Othello.
//!
//! This module provides the `GameState` struct which maintains the current
//! position, the side to move and the history of moves and passes. It
//! validates moves but never passes on its own; deciding when a side has to
//! pass is left to the turn controller.

use std::cmp::Ordering;
use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::error::GameError;
use crate::square::Square;

/// One entry of the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ply {
    /// The square played, `None` for a pass.
    pub mv: Option<Square>,
    /// The side that played it.
    pub side: Disc,
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win(Disc),
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(disc) => write!(f, "{disc} wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Represents the state of an Othello game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position, `player` being the side to move.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Disc,
    history: Vec<Ply>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// The initial position has 4 discs in the center (2 black, 2 white)
    /// with Black to move first.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Disc::Black)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from, seen from `side_to_move`
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Disc) -> Self {
        debug_assert!(side_to_move != Disc::Empty);
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Executes a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalMove` if `sq` is not in the legal move set;
    /// the position is left untouched in that case.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        let next = self.board.try_make_move(sq).ok_or(GameError::IllegalMove(sq))?;

        self.history.push(Ply {
            mv: Some(sq),
            side: self.side_to_move,
        });
        self.board = next;
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Hands the turn to the other side without placing a disc.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PassNotAllowed` while the side to move has a legal
    /// move, and `GameError::GameOver` when neither side can move.
    pub fn make_pass(&mut self) -> Result<(), GameError> {
        if self.board.has_legal_moves() {
            return Err(GameError::PassNotAllowed);
        }
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.history.push(Ply {
            mv: None,
            side: self.side_to_move,
        });
        self.board = self.board.switch_players();
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Checks if the game has ended (neither side has a legal move).
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn get_score(&self) -> (u32, u32) {
        if self.side_to_move == Disc::Black {
            (
                self.board.get_player_count(),
                self.board.get_opponent_count(),
            )
        } else {
            (
                self.board.get_opponent_count(),
                self.board.get_player_count(),
            )
        }
    }

    /// Returns the discs of `disc`'s side and of the other side.
    pub fn discs_of(&self, disc: Disc) -> (Bitboard, Bitboard) {
        if disc == self.side_to_move {
            (self.board.player, self.board.opponent)
        } else {
            (self.board.opponent, self.board.player)
        }
    }

    /// Returns the outcome, or `None` while the game is still running.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let (black, white) = self.get_score();
        Some(match black.cmp(&white) {
            Ordering::Greater => GameResult::Win(Disc::Black),
            Ordering::Less => GameResult::Win(Disc::White),
            Ordering::Equal => GameResult::Draw,
        })
    }

    /// Returns the last move played, ignoring a trailing pass.
    pub fn last_move(&self) -> Option<Square> {
        self.history.iter().rev().find_map(|ply| ply.mv)
    }

    /// Returns the moves and passes played so far, oldest first.
    pub fn move_history(&self) -> &[Ply] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.is_game_over());
        assert_eq!(game.get_score(), (2, 2));
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        assert_eq!(game.make_move(Square::D3), Ok(()));
        assert_eq!(game.side_to_move(), Disc::White);
        assert_eq!(game.get_score(), (4, 1));
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new();
        assert_eq!(
            game.make_move(Square::A1),
            Err(GameError::IllegalMove(Square::A1))
        );
        assert_eq!(game.make_move(Square::D4), Err(GameError::IllegalMove(Square::D4)));
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_pass() {
        // White to move has nothing, Black can still take C1
        let board = Board::from_string(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
            Disc::White,
        )
        .unwrap();
        let mut game = GameState::from_board(board, Disc::White);
        assert!(!game.board().has_legal_moves());
        assert_eq!(game.make_pass(), Ok(()));
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(
            game.move_history(),
            &[Ply {
                mv: None,
                side: Disc::White
            }]
        );

        assert_eq!(game.make_pass(), Err(GameError::PassNotAllowed));
    }

    #[test]
    fn test_pass_after_game_over() {
        let board = Board::from_bitboards(Square::A1.bitboard(), Square::H8.bitboard());
        let mut game = GameState::from_board(board, Disc::Black);
        assert!(game.is_game_over());
        assert_eq!(game.make_pass(), Err(GameError::GameOver));
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_game_over() {
        let mut game = GameState::new();

        while !game.is_game_over() {
            match game.board().get_moves().lsb_square() {
                Some(sq) => game.make_move(sq).unwrap(),
                None => game.make_pass().unwrap(),
            }
        }

        let (black, white) = game.get_score();
        let expected = match black.cmp(&white) {
            Ordering::Greater => GameResult::Win(Disc::Black),
            Ordering::Less => GameResult::Win(Disc::White),
            Ordering::Equal => GameResult::Draw,
        };
        assert_eq!(game.result(), Some(expected));
    }

    #[test]
    fn test_last_move() {
        let mut game = GameState::new();
        assert_eq!(game.last_move(), None);

        game.make_move(Square::D3).unwrap();
        assert_eq!(game.last_move(), Some(Square::D3));

        game.make_move(Square::C3).unwrap();
        assert_eq!(game.last_move(), Some(Square::C3));
    }

    #[test]
    fn test_from_board() {
        let board = Board::new();
        let game = GameState::from_board(board, Disc::White);

        assert_eq!(game.side_to_move(), Disc::White);
        assert_eq!(*game.board(), board);
        assert_eq!(game.move_history().len(), 0);
    }

    #[test]
    fn test_history_complete_record() {
        let mut game = GameState::new();

        game.make_move(Square::D3).unwrap();
        game.make_move(Square::C3).unwrap();
        game.make_move(Square::C4).unwrap();

        let history = game.move_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], Ply { mv: Some(Square::D3), side: Disc::Black });
        assert_eq!(history[1], Ply { mv: Some(Square::C3), side: Disc::White });
        assert_eq!(history[2], Ply { mv: Some(Square::C4), side: Disc::Black });
    }

    #[test]
    fn test_discs_of() {
        let mut game = GameState::new();
        game.make_move(Square::D3).unwrap();
        let (black, white) = game.discs_of(Disc::Black);
        assert_eq!(black.count(), 4);
        assert_eq!(white.count(), 1);
        assert_eq!(game.discs_of(Disc::White), (white, black));
    }
}
