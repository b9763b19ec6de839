//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Board, Difficulty, Player};

/// Tic-tac-toe engine - ask for moves, check boards, watch the computer play itself
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe rules engine and minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a match config (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the computer's move for a board
    Suggest {
        /// Board in row-major order, e.g. "XX./.O./..."
        #[arg(short, long)]
        board: Board,

        /// Side to move (X or O)
        #[arg(short, long)]
        player: Player,

        /// Override the configured difficulty (easy or hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Classify a board as in progress, won or drawn
    Evaluate {
        /// Board in row-major order
        #[arg(short, long)]
        board: Board,
    },

    /// Play computer against computer and print the score
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}
