//! Turn controller for a human versus computer game.
//!
//! A [`Session`] owns the game record, the search engine and a render sink.
//! Every accepted move is followed by the same settle step: find the next
//! side able to move, recording forced passes on the way, and derive the
//! controller [`Phase`] from it. The sink then receives one consistent view
//! of the result.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::error::GameError;
use crate::game_state::{GameResult, GameState, Ply};
use crate::input::BoardGeometry;
use crate::search::search_result::SearchResult;
use crate::search::{Search, SearchOptions, SearchRunOptions};
use crate::square::Square;

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The human is to move and input is accepted.
    WaitingForHuman,
    /// The computer is to move.
    ComputerThinking,
    /// Neither side can move. Terminal.
    GameOver,
}

/// Snapshot handed to the render sink after each state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub black: Bitboard,
    pub white: Bitboard,
    /// Legal moves of `side_to_move`; empty once the game is over.
    pub legal_moves: Bitboard,
    pub side_to_move: Disc,
    pub human: Disc,
    pub phase: Phase,
    pub last_move: Option<Square>,
}

/// Receives the board after every state change.
pub trait RenderSink {
    fn render(&mut self, view: &BoardView);
}

impl<F: FnMut(&BoardView)> RenderSink for F {
    fn render(&mut self, view: &BoardView) {
        self(view)
    }
}

/// A sink that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _view: &BoardView) {}
}

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Color played by the human. Black moves first.
    pub human: Disc,
    pub search: SearchOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            human: Disc::Black,
            search: SearchOptions::default(),
        }
    }
}

/// One human versus computer game.
pub struct Session<R: RenderSink> {
    game: GameState,
    human: Disc,
    search: Search,
    final_search: u32,
    phase: Phase,
    endgame: bool,
    sink: R,
}

impl<R: RenderSink> Session<R> {
    /// Starts a game from the standard opening position.
    pub fn new(options: SessionOptions, sink: R) -> Self {
        Self::from_game(GameState::new(), options, sink)
    }

    /// Starts a game from `board`, seen from `side_to_move`.
    pub fn from_board(board: Board, side_to_move: Disc, options: SessionOptions, sink: R) -> Self {
        Self::from_game(GameState::from_board(board, side_to_move), options, sink)
    }

    fn from_game(game: GameState, options: SessionOptions, sink: R) -> Self {
        debug_assert!(options.human != Disc::Empty);
        let mut session = Session {
            game,
            human: options.human,
            search: Search::new(&options.search),
            final_search: options.search.final_search,
            phase: Phase::GameOver,
            endgame: false,
            sink,
        };
        session.settle();
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while human input is accepted.
    pub fn is_playable(&self) -> bool {
        self.phase == Phase::WaitingForHuman
    }

    pub fn human(&self) -> Disc {
        self.human
    }

    pub fn computer(&self) -> Disc {
        self.human.opposite()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn side_to_move(&self) -> Disc {
        self.game.side_to_move()
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Bitboard {
        if self.phase == Phase::GameOver {
            Bitboard::new(0)
        } else {
            self.game.board().get_moves()
        }
    }

    /// Disc counts as `(black, white)`.
    pub fn disc_counts(&self) -> (u32, u32) {
        self.game.get_score()
    }

    pub fn history(&self) -> &[Ply] {
        self.game.move_history()
    }

    pub fn last_move(&self) -> Option<Square> {
        self.game.last_move()
    }

    /// Returns the outcome once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.game.result()
    }

    /// Returns `true` once the number of empty squares has dropped to the
    /// exhaustive search threshold. Stays raised for the rest of the game.
    pub fn is_endgame(&self) -> bool {
        self.endgame
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn into_sink(self) -> R {
        self.sink
    }

    /// Plays the human move `sq`.
    ///
    /// # Returns
    ///
    /// The phase reached after the move and any forced passes.
    ///
    /// # Errors
    ///
    /// `GameError::GameOver` after the end, `GameError::NotHumanTurn` while
    /// the computer is to move, `GameError::IllegalMove` if `sq` is not a
    /// legal move. A rejected move leaves the session unchanged.
    pub fn play_human(&mut self, sq: Square) -> Result<Phase, GameError> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::ComputerThinking => return Err(GameError::NotHumanTurn),
            Phase::WaitingForHuman => {}
        }
        self.game.make_move(sq)?;
        self.settle();
        Ok(self.phase)
    }

    /// Handles a click at `(x, y)` on a board drawn with `geometry`.
    ///
    /// Clicks outside the board, on an illegal square or while input is not
    /// accepted are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the click was played as a move.
    pub fn click(&mut self, x: i32, y: i32, geometry: &BoardGeometry) -> bool {
        if !self.is_playable() {
            return false;
        }
        geometry
            .cell_at(x, y)
            .is_ok_and(|sq| self.play_human(sq).is_ok())
    }

    /// Lets the computer play one move.
    ///
    /// # Errors
    ///
    /// `GameError::GameOver` after the end and `GameError::NotComputerTurn`
    /// while the human is to move.
    pub fn play_computer(&mut self, options: &SearchRunOptions) -> Result<SearchResult, GameError> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::WaitingForHuman => return Err(GameError::NotComputerTurn),
            Phase::ComputerThinking => {}
        }

        let result = self.search.run(self.game.board(), options);
        let sq = result.best_move.ok_or(GameError::NotComputerTurn)?;
        self.game.make_move(sq)?;
        self.settle();
        Ok(result)
    }

    /// Lets the computer move until the human is to move or the game ends.
    ///
    /// The computer moves again for as long as the human has to pass.
    pub fn run_computer_turns(
        &mut self,
        options: &SearchRunOptions,
    ) -> Result<Vec<SearchResult>, GameError> {
        let mut results = Vec::new();
        while self.phase == Phase::ComputerThinking {
            results.push(self.play_computer(options)?);
        }
        Ok(results)
    }

    /// Finds the next side able to move, recording forced passes, then
    /// renders.
    ///
    /// At most one pass is recorded: if the other side cannot move either the
    /// game is over.
    fn settle(&mut self) {
        if self.game.board().get_empty_count() <= self.final_search {
            self.endgame = true;
        }

        self.phase = loop {
            let board = self.game.board();
            if board.has_legal_moves() {
                break if self.game.side_to_move() == self.human {
                    Phase::WaitingForHuman
                } else {
                    Phase::ComputerThinking
                };
            }
            if self.game.make_pass().is_err() {
                break Phase::GameOver;
            }
        };

        let view = self.view();
        self.sink.render(&view);
    }

    /// Returns the current view of the game.
    pub fn view(&self) -> BoardView {
        let (black, white) = self.game.discs_of(Disc::Black);
        BoardView {
            black,
            white,
            legal_moves: self.legal_moves(),
            side_to_move: self.game.side_to_move(),
            human: self.human,
            phase: self.phase,
            last_move: self.game.last_move(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_options(human: Disc) -> SessionOptions {
        SessionOptions {
            human,
            search: SearchOptions {
                max_depth: 2,
                final_search: 8,
            },
        }
    }

    #[test]
    fn test_new_session_waits_for_human() {
        let mut views = Vec::new();
        let session = Session::new(SessionOptions::default(), |v: &BoardView| views.push(*v));
        assert_eq!(session.phase(), Phase::WaitingForHuman);
        assert!(session.is_playable());
        assert_eq!(session.legal_moves().count(), 4);
        assert_eq!(session.disc_counts(), (2, 2));
        drop(session);
        assert_eq!(views.len(), 1);
    }

    #[test]
    fn test_computer_opens_when_human_is_white() {
        let session = Session::new(fast_options(Disc::White), NullSink);
        assert_eq!(session.phase(), Phase::ComputerThinking);
        assert!(!session.is_playable());
        assert_eq!(session.computer(), Disc::Black);
    }

    #[test]
    fn test_human_move_hands_over_to_computer() {
        let mut session = Session::new(fast_options(Disc::Black), NullSink);
        assert_eq!(session.play_human(Square::D3), Ok(Phase::ComputerThinking));
        assert_eq!(session.disc_counts(), (4, 1));
        assert_eq!(session.last_move(), Some(Square::D3));

        assert_eq!(session.play_human(Square::C3), Err(GameError::NotHumanTurn));

        let result = session.play_computer(&SearchRunOptions::default()).unwrap();
        assert!(result.best_move.is_some());
        assert_eq!(session.phase(), Phase::WaitingForHuman);
        assert_eq!(session.side_to_move(), Disc::Black);
        assert_eq!(
            session.play_computer(&SearchRunOptions::default()),
            Err(GameError::NotComputerTurn)
        );
    }

    #[test]
    fn test_illegal_move_is_rejected_without_change() {
        let mut session = Session::new(fast_options(Disc::Black), NullSink);
        let before = *session.board();
        assert_eq!(
            session.play_human(Square::A1),
            Err(GameError::IllegalMove(Square::A1))
        );
        assert_eq!(*session.board(), before);
        assert_eq!(session.phase(), Phase::WaitingForHuman);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_click_ignores_invalid_input() {
        let geometry = BoardGeometry::new(400, 400).unwrap();
        let mut session = Session::new(fast_options(Disc::Black), NullSink);

        assert!(!session.click(-5, 10, &geometry));
        assert!(!session.click(10, 10, &geometry));
        assert_eq!(session.phase(), Phase::WaitingForHuman);

        // D3: column 3, row 2
        assert!(session.click(175, 125, &geometry));
        assert_eq!(session.phase(), Phase::ComputerThinking);
        assert!(!session.click(125, 125, &geometry));
    }

    #[test]
    fn test_forced_pass_keeps_human_to_move() {
        // after Black C1 White has no move but Black still has E1
        let board = Board::from_string(
            "XO---OOX\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
            Disc::Black,
        )
        .unwrap();
        let mut session = Session::from_board(board, Disc::Black, fast_options(Disc::Black), NullSink);
        assert_eq!(session.play_human(Square::C1), Ok(Phase::WaitingForHuman));
        assert_eq!(
            session.history().last(),
            Some(&Ply {
                mv: None,
                side: Disc::White
            })
        );
        assert_eq!(session.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_game_over_when_both_sides_pass() {
        let board = Board::from_bitboards(Square::A1.bitboard(), Square::H8.bitboard());
        let mut session = Session::from_board(board, Disc::Black, fast_options(Disc::Black), NullSink);
        assert_eq!(session.phase(), Phase::GameOver);
        assert!(session.legal_moves().is_empty());
        assert_eq!(session.result(), Some(GameResult::Draw));
        assert_eq!(session.play_human(Square::B1), Err(GameError::GameOver));
        assert_eq!(
            session.play_computer(&SearchRunOptions::default()),
            Err(GameError::GameOver)
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_computer_moves_again_while_human_passes() {
        // White (computer) plays C1 and E1; Black has no reply in between
        let board = Board::from_string(
            "OX---XXO\
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
        let mut session = Session::from_board(board, Disc::White, fast_options(Disc::Black), NullSink);
        assert_eq!(session.phase(), Phase::ComputerThinking);

        let results = session.run_computer_turns(&SearchRunOptions::default()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.result(), Some(GameResult::Win(Disc::White)));
        assert_eq!(session.disc_counts(), (0, 7));
    }

    #[test]
    fn test_endgame_flag() {
        let board = Board::from_string(
            "XXXXXXXOXOOXXXXOXOXXXOXOXOOXOXXOXOXOOOXOXOOOOOXOXOOOXXXO-X-OXOOO",
            Disc::Black,
        )
        .unwrap();
        let session = Session::from_board(board, Disc::Black, fast_options(Disc::Black), NullSink);
        assert!(session.is_endgame());
        assert!(!Session::new(fast_options(Disc::Black), NullSink).is_endgame());
    }
}
