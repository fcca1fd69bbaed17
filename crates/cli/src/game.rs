//! Terminal rendering of the game.

use std::cmp::Ordering;

use colored::Colorize;
use othello_core::disc::Disc;
use othello_core::session::{BoardView, Phase, RenderSink};
use othello_core::square::Square;

/// Render sink drawing the board with ANSI colors on stdout.
#[derive(Debug, Default)]
pub struct TerminalView;

impl RenderSink for TerminalView {
    fn render(&mut self, view: &BoardView) {
        print_board(view);
    }
}

fn disc_at(view: &BoardView, sq: Square) -> Disc {
    if view.black.contains(sq) {
        Disc::Black
    } else if view.white.contains(sq) {
        Disc::White
    } else {
        Disc::Empty
    }
}

/// Prints a colored representation of the board to the terminal.
pub fn print_board(view: &BoardView) {
    let black_count = view.black.count();
    let white_count = view.white.count();

    println!();
    println!("      a   b   c   d   e   f   g   h");
    println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

    for y in 0..8 {
        print!("  {} │", y + 1);

        for x in 0..8 {
            let sq = Square::from_usize_unchecked(y * 8 + x);
            let is_legal = view.legal_moves.contains(sq);
            let is_last_move = Some(sq) == view.last_move;

            let symbol = match disc_at(view, sq) {
                Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                Disc::Black => " X ".bright_green(),
                Disc::White => " O ".bright_yellow(),
                Disc::Empty if is_legal => " · ".bright_cyan(),
                Disc::Empty => "   ".black(),
            };
            print!("{symbol}│");
        }

        match y {
            2 => {
                let turn = match (view.phase, view.side_to_move) {
                    (Phase::GameOver, _) => "".normal(),
                    (_, Disc::Black) => "Black's turn (X)".bright_green(),
                    (_, _) => "White's turn (O)".bright_yellow(),
                };
                println!("   {turn}");
            }
            3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
            4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
            5 => println!("   You play {}", side_label(view.human)),
            6 if view.phase == Phase::GameOver => match black_count.cmp(&white_count) {
                Ordering::Greater => println!("   {}", "Black wins!".bright_green()),
                Ordering::Less => println!("   {}", "White wins!".bright_yellow()),
                Ordering::Equal => println!("   {}", "Draw".bright_cyan()),
            },
            7 if view.phase == Phase::GameOver => {
                println!("   {}", "*** Game Over ***".bright_red())
            }
            _ => println!(),
        }

        if y < 7 {
            println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
}

fn side_label(disc: Disc) -> String {
    match disc {
        Disc::Black => format!("{}", "Black (X)".bright_green()),
        Disc::White => format!("{}", "White (O)".bright_yellow()),
        Disc::Empty => String::new(),
    }
}
