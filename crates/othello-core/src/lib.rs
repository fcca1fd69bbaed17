//! Othello engine: bitboards, move generation, search and the turn controller.

pub mod bitboard;
pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
pub mod flip;
pub mod game_state;
pub mod input;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod session;
pub mod square;
pub mod types;
