mod common;

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::search::{Search, SearchOptions, SearchRunOptions};
use othello_core::square::Square;

use common::{brute_force, random_position};

fn solve(board: &Board) -> (Option<Square>, i32) {
    let mut search = Search::new(&SearchOptions::default());
    let result = search.run(board, &SearchRunOptions::default());
    assert!(result.is_endgame);
    assert_eq!(result.depth, board.get_empty_count());
    (result.best_move, result.score)
}

fn assert_optimal(board: &Board) {
    let (best_move, score) = solve(board);
    let expected = brute_force(board);

    match best_move {
        Some(sq) => {
            assert!(board.is_legal_move(sq));
            assert_eq!(score, expected, "board:\n{board}");
            // ties go to the first best move in square order
            let first_best = board
                .get_moves()
                .iter()
                .find(|&mv| -brute_force(&board.make_move(mv)) == expected);
            assert_eq!(Some(sq), first_best, "board:\n{board}");
        }
        None => assert!(!board.has_legal_moves()),
    }
}

#[test]
fn test_endgame_two_empties() {
    let board = Board::from_string(
        "XXXXXXXOXOOXXXXOXOXXXOXOXOOXOXXOXOXOOOXOXOOOOOXOXOOOXXXO-X-OXOOO",
        Disc::Black,
    )
    .unwrap();
    assert_optimal(&board);
    assert_optimal(&board.switch_players());
}

#[test]
fn test_endgame_with_pass_in_line() {
    let board = Board::from_string(
        "XXXXXXXX\
         XXXXXXXX\
         XXXXXXXX\
         XXXXXXXX\
         XXXXXXXX\
         XXXXXXOO\
         XXXXXXO-\
         XXXXXO--",
        Disc::White,
    )
    .unwrap();
    assert_optimal(&board);
}

#[test]
fn test_endgame_random_positions() {
    let mut checked = 0;
    for seed in 0..12 {
        let Some(board) = random_position(seed, 8) else {
            continue;
        };
        assert_optimal(&board);
        checked += 1;
    }
    assert!(checked > 0);
}
