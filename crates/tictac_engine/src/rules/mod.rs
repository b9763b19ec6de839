//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are kept apart from board
//! storage so the search can call them on a scratch board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Classifies `board`.
///
/// A win takes priority over a full board; lines are checked in [`LINES`]
/// order and the first complete one is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = check_winner(board) {
        Outcome::Won { winner, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
