//! Transition invariants for boards.

use super::types::{Board, Square};

/// A logical property that must hold across a state transition.
pub trait Invariant<S> {
    /// Checks if the invariant holds between `before` and `after`.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: a move fills exactly one empty square and touches nothing else.
pub struct MonotonicBoard;

impl Invariant<Board> for MonotonicBoard {
    fn holds(before: &Board, after: &Board) -> bool {
        let mut changed = 0;
        for (old, new) in before.squares().iter().zip(after.squares()) {
            if old == new {
                continue;
            }
            if *old != Square::Empty || *new == Square::Empty {
                return false;
            }
            changed += 1;
        }
        changed == 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (one empty square filled per move)"
    }
}
