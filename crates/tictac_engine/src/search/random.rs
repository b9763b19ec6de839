//! Uniform random move selection.

use crate::{Board, Position};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks an open square uniformly at random using the thread RNG.
///
/// Returns `None` on a full board.
pub fn random_move(board: &Board) -> Option<Position> {
    random_move_with(board, &mut rand::rng())
}

/// Like [`random_move`], drawing from the supplied RNG.
pub fn random_move_with<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let open: Vec<Position> = board.empty_positions().collect();
    open.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_open_squares() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = random_move_with(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_reaches_every_open_square() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..500)
            .filter_map(|_| random_move_with(&board, &mut rng))
            .collect();
        let open: HashSet<_> = board.empty_positions().collect();
        assert_eq!(seen, open);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(random_move(&board), None);
    }
}
