//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::invariants::{Invariant, MonotonicBoard};
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game, and the marker that player places.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::place`] returns a new board and leaves
/// the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Open positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// True when every square is empty.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Places `player` at `pos`, returning the resulting board.
    ///
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self))]
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        debug_assert!(
            MonotonicBoard::holds(self, &next),
            "{}",
            MonotonicBoard::description()
        );
        Ok(next)
    }

    /// Overwrites a square. Only the search scratch board uses this.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board {:?}: {}", input, reason)]
pub struct BoardParseError {
    /// The text that failed to parse.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl BoardParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are markers; `.`, `-` and `_` are empty.
    /// Whitespace, `/` and `|` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardParseError::new(s, format!("unexpected character {other:?}")));
                }
            };
            if count == 9 {
                return Err(BoardParseError::new(s, "more than 9 cells"));
            }
            board.squares[count] = square;
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::new(s, format!("expected 9 cells, found {count}")));
        }
        Ok(board)
    }
}

/// Creates an empty board.
pub fn create_board() -> Board {
    Board::new()
}

/// Places `player` at board index `index` (0-8).
///
/// Fails with [`MoveError::InvalidIndex`] above 8 and
/// [`MoveError::SquareOccupied`] when the square is taken.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let pos = Position::try_from(index)?;
    board.place(pos, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_blank() {
        let board = create_board();
        assert!(board.is_blank());
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().count(), 9);
    }

    #[test]
    fn test_place_leaves_input_untouched() {
        let board = Board::new();
        let next = board.place(Position::Center, Player::X).unwrap();
        assert!(board.is_blank());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        let changed = Position::ALL
            .iter()
            .filter(|p| board.get(**p) != next.get(**p))
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let board = Board::new().place(Position::TopLeft, Player::X).unwrap();
        assert_eq!(
            board.place(Position::TopLeft, Player::O),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_apply_move_invalid_index() {
        let board = create_board();
        assert_eq!(apply_move(&board, 9, Player::X), Err(MoveError::InvalidIndex(9)));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.empty_positions().count(), 6);
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert!("XXO".parse::<Board>().is_err());
        assert!("XXO/OOX/XOXO".parse::<Board>().is_err());
        assert!("XXO/OZX/XOX".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().place(Position::Center, Player::O).unwrap();
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_parse_and_opponent() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.to_string(), "O");
    }
}
