//! Non-interactive commands: perft and single position solving.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::perft::perft_root;
use othello_core::search::{Search, SearchOptions, SearchRunOptions};

/// Prints perft node counts for depths 1 through `max_depth`.
pub fn perft(max_depth: u32) -> Result<()> {
    println!("| {:^5} | {:^12} | {:^9} | {:^12} |", "Depth", "Nodes", "Time", "N/s");
    println!("|-------|--------------|-----------|--------------|");

    for depth in 1..=max_depth {
        let start = Instant::now();
        let nodes = perft_root(depth);
        let elapsed = start.elapsed();
        let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
        println!(
            "| {:>5} | {:>12} | {:>8.3}s | {:>12} |",
            depth,
            nodes,
            elapsed.as_secs_f64(),
            nps
        );
    }
    Ok(())
}

/// Searches one position and prints the chosen move.
pub fn solve(board: &str, side: &str, options: &SearchOptions) -> Result<()> {
    let side_to_move = parse_side(side)?;
    let board = Board::from_string(board, side_to_move).context("invalid board")?;

    println!("{}", board.to_string_as_board(side_to_move));
    println!("{side_to_move} to move, {} empties", board.get_empty_count());

    let mut search = Search::new(options);
    let start = Instant::now();
    let result = search.run(&board, &SearchRunOptions::default());
    let elapsed = start.elapsed();

    let Some(best_move) = result.best_move else {
        let verdict = if board.is_game_over() {
            "game over"
        } else {
            "pass"
        };
        println!("{}", verdict.bright_yellow());
        return Ok(());
    };

    let kind = if result.is_endgame { "exact" } else { "depth" };
    println!(
        "best {} | score {} | {kind} {} | nodes {} | {:.3}s",
        best_move.to_string().bright_green(),
        result.score,
        result.depth,
        result.n_nodes,
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn parse_side(side: &str) -> Result<Disc> {
    let mut chars = side.chars();
    match (chars.next().and_then(Disc::from_char), chars.next()) {
        (Some(disc), None) if disc != Disc::Empty => Ok(disc),
        _ => bail!("side must be x or o, got '{side}'"),
    }
}
