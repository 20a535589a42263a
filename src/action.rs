//! Moves and the errors raised when a move is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::Mark;

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// A rejected move (the "illegal move" kind).
///
/// Rejections never change state; callers are free to drop them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winner or is full.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// A raw index outside 0-8.
    #[display("Position index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// A history invariant failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
