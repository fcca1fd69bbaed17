mod game;
mod solve;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use othello_core::constants::{FINAL_SEARCH, MAX_DEPTH};
use othello_core::disc::Disc;
use othello_core::search::SearchOptions;
use othello_core::session::SessionOptions;

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    /// Midgame search depth in plies
    #[arg(short, long, default_value_t = MAX_DEPTH, value_parser = clap::value_parser!(u32).range(1..=20))]
    depth: u32,

    /// Number of empty squares at which the search becomes exhaustive
    #[arg(long, default_value_t = FINAL_SEARCH, value_parser = clap::value_parser!(u32).range(0..=20))]
    final_search: u32,
}

impl EngineParams {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_depth: self.depth,
            final_search: self.final_search,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play Othello against the computer")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    engine_params: EngineParams,

    /// Play White; the computer opens the game
    #[arg(long)]
    white: bool,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Print search progress
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Count move generation leaves from the opening position
    Perft {
        #[arg(default_value_t = 8)]
        depth: u32,
    },
    /// Find the best move of a position given as 64 cells (X, O, -), A1 first
    Solve {
        board: String,

        /// Side to move (x or o)
        #[arg(long, default_value = "x")]
        side: String,

        #[command(flatten)]
        engine_params: EngineParams,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Perft { depth }) => solve::perft(depth),
        Some(SubCommands::Solve {
            board,
            side,
            engine_params,
        }) => solve::solve(&board, &side, &engine_params.search_options()),
        None => {
            let human = if args.white { Disc::White } else { Disc::Black };
            ui::ui_loop(ui::PlayOptions {
                session: SessionOptions {
                    human,
                    search: args.engine_params.search_options(),
                },
                delay: Duration::from_millis(args.delay_ms),
                verbose: args.verbose,
            })
        }
    }
}
