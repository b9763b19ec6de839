//! Running tally of finished games.

use serde::{Deserialize, Serialize};
use tictac_engine::{Outcome, Player};

/// Wins per side and draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished game. `InProgress` is ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { winner: Player::X, .. } => self.x_wins += 1,
            Outcome::Won { winner: Player::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} - {} O ({} draws)",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
