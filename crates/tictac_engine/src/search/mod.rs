//! Move selection for computer players.
//!
//! Two tiers: [`Difficulty::Hard`] plays perfectly via exhaustive minimax,
//! [`Difficulty::Easy`] picks any open square at random.

mod minimax;
mod random;

pub use minimax::{LOSS_SCORE, WIN_SCORE, best_move, minimax};
pub use random::{random_move, random_move_with};

use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random open square.
    #[display("easy")]
    Easy,
    /// Minimax; never loses.
    #[default]
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// Chooses a move for `player`, or `None` when the board is full.
    #[instrument(skip(board))]
    pub fn choose(self, board: &Board, player: Player) -> Option<Position> {
        let choice = match self {
            Difficulty::Easy => random_move(board),
            Difficulty::Hard => best_move(board, player),
        };
        debug!(?choice, "Move chosen");
        choice
    }
}
