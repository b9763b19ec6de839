//! Exhaustive minimax search.
//!
//! Scores are from the searching player's view: a win is worth
//! `WIN_SCORE - depth`, a loss `depth - WIN_SCORE`, a draw 0.
//! Faster wins and slower losses therefore rank higher.
//!
//! The search places and clears marks on a private copy of the board,
//! so callers never observe intermediate states.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// Score of an immediate loss.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Returns the best position for `own`, or `None` on a full board.
///
/// Ties go to the lowest index. A blank board short-circuits to the
/// center.
#[instrument(skip(board))]
pub fn best_move(board: &Board, own: Player) -> Option<Position> {
    if board.is_blank() {
        return Some(Position::Center);
    }

    let opponent = own.opponent();
    let mut scratch = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        // Children scoring at or below the current best cannot replace it,
        // so the running best is a sound lower bound.
        let alpha = best.map_or(i32::MIN, |(_, score)| score);
        scratch.set(pos, Square::Occupied(own));
        let score = alpha_beta(&mut scratch, 0, false, own, opponent, alpha, i32::MAX);
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    debug!(?best, "Search complete");
    best.map(|(pos, _)| pos)
}

/// Plain minimax value of `board` for `own` against `opponent`.
///
/// `maximizing` says whether `own` is to move. No pruning; [`best_move`]
/// returns the same choices with alpha-beta cutoffs.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, own: Player, opponent: Player) -> i32 {
    let mut scratch = *board;
    full_width(&mut scratch, depth, maximizing, own, opponent)
}

fn terminal_score(board: &Board, depth: i32, own: Player) -> Option<i32> {
    match check_winner(board) {
        Some((winner, _)) if winner == own => Some(WIN_SCORE - depth),
        Some(_) => Some(depth - WIN_SCORE),
        None if is_full(board) => Some(0),
        None => None,
    }
}

fn full_width(board: &mut Board, depth: i32, maximizing: bool, own: Player, opponent: Player) -> i32 {
    if let Some(score) = terminal_score(board, depth, own) {
        return score;
    }

    let mover = if maximizing { own } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mover));
        let score = full_width(board, depth + 1, !maximizing, own, opponent);
        board.set(pos, Square::Empty);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

fn alpha_beta(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    own: Player,
    opponent: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, depth, own) {
        return score;
    }

    let mover = if maximizing { own } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mover));
        let score = alpha_beta(board, depth + 1, !maximizing, own, opponent, alpha, beta);
        board.set(pos, Square::Empty);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}
