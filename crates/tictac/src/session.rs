//! Game session: turn order, computer moves and scoring.

use super::config::MatchConfig;
use super::scoreboard::Scoreboard;
use derive_more::{Display, Error, From};
use tictac_engine::{Board, Move, MoveError, Outcome, Player, Position, evaluate};
use tracing::{debug, info, instrument};

/// Error returned when a session rejects an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The current game has finished.
    #[display("Game is already over")]
    GameOver,

    /// A human tried to move while the computer is to play.
    #[display("It's the computer's turn")]
    ComputerTurn,

    /// The computer was asked to move for a human side.
    #[display("It's not the computer's turn")]
    NotComputerTurn,

    /// The move itself was illegal.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

/// A match in progress: the current game plus the running score.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: MatchConfig,
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
    scores: Scoreboard,
}

impl GameSession {
    /// Creates a session and starts the first game.
    #[instrument(skip(config))]
    pub fn new(config: MatchConfig) -> Self {
        info!(mode = %config.mode(), "Creating new game session");
        let to_move = *config.starting_player();
        Self {
            config,
            board: Board::new(),
            to_move,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            scores: Scoreboard::default(),
        }
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current game's outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves played in the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the running score.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// True when the computer should make the next move.
    pub fn is_computer_turn(&self) -> bool {
        !self.outcome.is_over() && self.config.is_computer(self.to_move)
    }

    /// Display name for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        self.config.name_of(player)
    }

    /// One-line status: whose turn, who won, or a draw.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("{}'s Turn", self.player_name(self.to_move)),
            Outcome::Won { winner, .. } => format!("{} Wins!", self.player_name(winner)),
            Outcome::Draw => "It's a Draw!".to_string(),
        }
    }

    /// Plays a human move for the player to move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Outcome, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.config.is_computer(self.to_move) {
            return Err(SessionError::ComputerTurn);
        }
        self.apply(pos)
    }

    /// Like [`GameSession::play`], taking a raw board index.
    pub fn play_index(&mut self, index: usize) -> Result<Outcome, SessionError> {
        let pos = Position::try_from(index)?;
        self.play(pos)
    }

    /// Lets the computer choose and play its move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn computer_turn(&mut self) -> Result<Outcome, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }
        if !self.config.is_computer(self.to_move) {
            return Err(SessionError::NotComputerTurn);
        }
        let pos = self.choose()?;
        self.apply(pos)
    }

    /// Plays the current game to the end with the computer on both sides.
    #[instrument(skip(self))]
    pub fn play_out(&mut self) -> Result<Outcome, SessionError> {
        while !self.outcome.is_over() {
            let pos = self.choose()?;
            self.apply(pos)?;
        }
        Ok(self.outcome)
    }

    /// Starts a new game with the same players; scores are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(scores = %self.scores, "Restarting game");
        self.board = Board::new();
        self.to_move = *self.config.starting_player();
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    /// Starts a new match under `config`; scores are reset.
    #[instrument(skip(self, config))]
    pub fn new_match(&mut self, config: MatchConfig) {
        *self = Self::new(config);
    }

    fn choose(&self) -> Result<Position, SessionError> {
        self.config
            .difficulty()
            .choose(&self.board, self.to_move)
            .ok_or(SessionError::GameOver)
    }

    fn apply(&mut self, pos: Position) -> Result<Outcome, SessionError> {
        let mov = Move::new(self.to_move, pos);
        self.board = mov.apply(&self.board)?;
        self.history.push(mov);
        debug!(%mov, "Move applied");

        self.outcome = evaluate(&self.board);
        if self.outcome.is_over() {
            self.scores.record(&self.outcome);
            info!(outcome = %self.outcome, scores = %self.scores, "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    fn two_player() -> GameSession {
        GameSession::new(MatchConfig::default().with_mode(GameMode::TwoPlayer))
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = two_player();
        assert_eq!(session.to_move(), Player::X);
        session.play(Position::Center).unwrap();
        assert_eq!(session.to_move(), Player::O);
        session.play(Position::TopLeft).unwrap();
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut session = two_player();
        session.play(Position::Center).unwrap();
        let err = session.play(Position::Center).unwrap_err();
        assert_eq!(err, SessionError::Move(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(session.to_move(), Player::O);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let mut session = two_player();
        assert_eq!(
            session.play_index(9),
            Err(SessionError::Move(MoveError::InvalidIndex(9)))
        );
    }

    #[test]
    fn test_status_line() {
        let mut session = GameSession::new(
            MatchConfig::default()
                .with_mode(GameMode::TwoPlayer)
                .with_player_x_name("Alice"),
        );
        assert_eq!(session.status_line(), "Alice's Turn");
        for index in [0, 3, 1, 4, 2] {
            session.play_index(index).unwrap();
        }
        assert_eq!(session.status_line(), "Alice Wins!");
    }
}
