//! Game state with history navigation.
//!
//! A [`GameState`] is a history of board snapshots plus a pointer to the one
//! being shown. Every operation returns a new state and leaves `self`
//! unchanged, so a rejected move is a no-op for the caller.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::action::{Move, MoveError};
use crate::config::EngineConfig;
use crate::contracts::{Contract, PlayContract};
use crate::engine;
use crate::history::{History, JumpError};
use crate::outcome::{Outcome, Phase};
use crate::position::Position;
use crate::status::{MoveLabel, Status};
use crate::types::{Board, Mark};

/// Complete game state: history, the move being shown, and settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    current_move: usize,
    config: EngineConfig,
}

impl GameState {
    /// A new game: history holds the empty board, current move 0.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// A new game using `config`.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            config,
        }
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mutable history access. Only used to corrupt state in tests.
    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Index of the snapshot being shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Settings this game was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Board at the current move.
    pub fn board(&self) -> &Board {
        // current_move is only ever set to a validated index.
        &self.history.snapshots()[self.current_move]
    }

    /// Mark that moves next, from the parity of the current move.
    pub fn next_mark(&self) -> Mark {
        let first = *self.config.first_player();
        if self.current_move % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }

    /// Outcome of the board at the current move.
    pub fn outcome(&self) -> Outcome {
        engine::evaluate(self.board())
    }

    /// In progress or terminal, recomputed from the current board.
    pub fn phase(&self) -> Phase {
        self.outcome().phase()
    }

    /// Empty squares on the current board.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    /// Plays the next mark at `pos`.
    ///
    /// Snapshots after the current move are discarded before the new board is
    /// appended, so playing after a jump replaces the old future.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board is won or drawn.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    /// - [`MoveError::InvariantViolation`] if post-move checks are enabled and fail.
    #[instrument(skip(self), fields(position = %pos, current_move = self.current_move))]
    pub fn play(&self, pos: Position) -> Result<GameState, MoveError> {
        let action = Move::new(self.next_mark(), pos);

        if let Err(e) = PlayContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let board = engine::apply_move(self.board(), action.position, action.mark)?;
        let history = engine::truncate_and_append(&self.history, self.current_move, board);
        let next = GameState {
            current_move: history.last_index(),
            history,
            config: self.config,
        };

        if *self.config.verify_invariants() {
            PlayContract::post(self, &next)?;
        }

        match next.outcome() {
            Outcome::InProgress => debug!(%action, "Move applied"),
            outcome => info!(%action, %outcome, "Game over"),
        }
        Ok(next)
    }

    /// [`play`](Self::play) addressed by raw board index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidIndex`] for an index above 8, otherwise as `play`.
    pub fn play_index(&self, index: usize) -> Result<GameState, MoveError> {
        self.play(Position::try_from(index)?)
    }

    /// Plays at `pos`, or returns an unchanged copy if the move is illegal.
    pub fn play_or_keep(&self, pos: Position) -> GameState {
        self.play(pos).unwrap_or_else(|_| self.clone())
    }

    /// Shows the snapshot at `index` without changing history.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `index` is past the newest snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&self, index: usize) -> Result<GameState, JumpError> {
        let current_move = engine::jump_to(&self.history, index).inspect_err(|e| {
            warn!(error = %e, "Jump rejected");
        })?;
        Ok(GameState {
            history: self.history.clone(),
            current_move,
            config: self.config,
        })
    }

    /// Status line for the current board.
    pub fn status(&self) -> Status {
        Status::from_outcome(&self.outcome(), self.next_mark())
    }

    /// Move-list label of the current entry.
    pub fn position_label(&self) -> MoveLabel {
        MoveLabel::for_entry(self.current_move, self.current_move)
    }

    /// One label per history entry, oldest first.
    pub fn move_labels(&self) -> Vec<MoveLabel> {
        (0..self.history.len())
            .map(|i| MoveLabel::for_entry(i, self.current_move))
            .collect()
    }

    /// Whether `pos` lies on the winning line of the current board.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.outcome()
            .winning_line()
            .is_some_and(|line| line.contains(pos))
    }

    /// Rebuilds a game from positions played in order from the start.
    ///
    /// # Errors
    ///
    /// The first rejected move's [`MoveError`].
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameState, MoveError> {
        positions
            .iter()
            .try_fold(GameState::new(), |game, pos| game.play(*pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
