//! Tic-tac-toe rules engine and computer opponent.
//!
//! The engine is a set of pure functions over an immutable [`Board`]:
//!
//! - **Board model**: [`create_board`], [`apply_move`], [`Board::place`]
//! - **Rules**: [`evaluate`] classifies a board as in progress, won or drawn
//! - **Search**: [`best_move`] runs an exhaustive minimax, [`random_move`]
//!   picks uniformly among open squares
//!
//! # Example
//!
//! ```
//! use tictac_engine::{apply_move, best_move, create_board, evaluate, Outcome, Player};
//!
//! let board = create_board();
//! let board = apply_move(&board, 0, Player::X)?;
//! let board = apply_move(&board, 1, Player::X)?;
//!
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(best_move(&board, Player::O).map(|p| p.to_index()), Some(2));
//! # Ok::<(), tictac_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod outcome;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{Invariant, MonotonicBoard};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, Line, check_winner, evaluate, is_draw, is_full};
pub use search::{Difficulty, LOSS_SCORE, WIN_SCORE, best_move, minimax, random_move, random_move_with};
pub use types::{Board, BoardParseError, Player, Square, apply_move, create_board};
