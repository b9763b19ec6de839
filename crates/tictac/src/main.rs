//! Tictac - headless CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictac::{GameSession, MatchConfig};
use tictac_engine::{Board, Difficulty, Player, evaluate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Command::Suggest {
            board,
            player,
            difficulty,
        } => suggest(&board, player, difficulty.unwrap_or(*config.difficulty())),
        Command::Evaluate { board } => {
            println!("{}", evaluate(&board));
            Ok(())
        }
        Command::Selfplay { games } => selfplay(config, games),
    }
}

/// Print the chosen move for `player`.
#[instrument(skip(board))]
fn suggest(board: &Board, player: Player, difficulty: Difficulty) -> Result<()> {
    let outcome = evaluate(board);
    if outcome.is_over() {
        println!("No move: {}", outcome);
        return Ok(());
    }
    match difficulty.choose(board, player) {
        Some(pos) => println!("{} ({})", pos.to_index(), pos),
        None => println!("No move: board is full"),
    }
    Ok(())
}

/// Play `games` computer-vs-computer games and print the tally.
#[instrument(skip(config))]
fn selfplay(config: MatchConfig, games: u32) -> Result<()> {
    let mut session = GameSession::new(config);
    for game in 1..=games {
        session.play_out()?;
        println!("Game {}: {}", game, session.status_line());
        info!(game, board = %session.board(), "Self-play game done");
        session.restart();
    }
    println!("{}", session.scores());
    Ok(())
}
