//! Interactive line-based game loop.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use othello_core::search::{SearchProgress, SearchProgressCallback, SearchRunOptions};
use othello_core::session::{Phase, RenderSink, Session, SessionOptions};
use othello_core::square::Square;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::TerminalView;

/// Settings of an interactive game.
#[derive(Clone, Copy, Debug)]
pub struct PlayOptions {
    pub session: SessionOptions,
    /// Pause before each computer move.
    pub delay: Duration,
    /// Print search progress after each root move.
    pub verbose: bool,
}

/// Runs a human versus computer game on the terminal.
///
/// The human types squares such as `d3`; `new` restarts, `moves` lists the
/// game so far and `quit` leaves.
pub fn ui_loop(options: PlayOptions) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new(options.session, TerminalView);
    let run_options = run_options(options.verbose);
    let mut endgame_announced = false;

    loop {
        if session.phase() == Phase::ComputerThinking {
            if !options.delay.is_zero() {
                thread::sleep(options.delay);
            }
            let result = session.play_computer(&run_options)?;
            if let Some(sq) = result.best_move {
                let mode = if result.is_endgame { "exact" } else { "depth" };
                println!(
                    "Computer plays {} ({mode} {}, score {}, {} nodes)",
                    sq.to_string().bright_magenta(),
                    result.depth,
                    result.score,
                    result.n_nodes
                );
            }
            if result.is_endgame && !endgame_announced {
                println!("{}", "Endgame: searching to the end of the game".bright_blue());
                endgame_announced = true;
            }
            continue;
        }

        let prompt = if session.phase() == Phase::GameOver {
            "new/quit> "
        } else {
            "> "
        };
        let line = match rl.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };

        match cmd {
            "new" | "n" => {
                session = Session::new(options.session, TerminalView);
                endgame_announced = false;
            }
            "moves" | "h" => println!("{}", format_history(&session)),
            "quit" | "q" => break,
            _ => match cmd.parse::<Square>() {
                Ok(sq) => {
                    if let Err(err) = session.play_human(sq) {
                        println!("{}", err.to_string().red());
                    }
                }
                Err(_) => println!("Unknown command: {cmd}"),
            },
        }
    }

    if let Some(result) = session.result() {
        let (black, white) = session.disc_counts();
        println!("{result} ({black}-{white})");
    }
    Ok(())
}

fn run_options(verbose: bool) -> SearchRunOptions {
    if !verbose {
        return SearchRunOptions::default();
    }
    let callback: Arc<SearchProgressCallback> = Arc::new(|progress: SearchProgress| {
        eprintln!(
            "  {} {:>2} | best {} | score {:>7} | nodes {:>10}",
            if progress.is_endgame { "exact" } else { "depth" },
            progress.depth,
            progress.best_move,
            progress.score,
            progress.nodes
        );
    });
    SearchRunOptions::with_callback(callback)
}

fn format_history<R: RenderSink>(session: &Session<R>) -> String {
    session
        .history()
        .iter()
        .map(|ply| match ply.mv {
            Some(sq) => sq.to_string(),
            None => "pass".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
