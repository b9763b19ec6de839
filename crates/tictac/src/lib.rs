//! Tic-tac-toe sessions on top of [`tictac_engine`].
//!
//! # Architecture
//!
//! - **Config**: match setup loaded from TOML (names, mode, difficulty)
//! - **Session**: turn order, computer moves, result tracking
//! - **Scoreboard**: running tally of wins and draws across games

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scoreboard;
mod session;

pub use config::{ConfigError, GameMode, MatchConfig};
pub use scoreboard::Scoreboard;
pub use session::{GameSession, SessionError};
