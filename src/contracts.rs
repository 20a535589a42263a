//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are always checked; postconditions run when the engine is configured to
//! verify invariants.

use tracing::{instrument, warn};

use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::{HistoryInvariants, InvariantSet};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board shown is not won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a terminal board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        let outcome = game.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the cell holds a mark.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(mv.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mv.position))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mv, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move.
///
/// Preconditions:
/// - Game is not over
/// - Square is empty
///
/// Postconditions:
/// - All [`HistoryInvariants`] hold
/// - The new current move is one past the old one
pub struct PlayContract;

impl Contract<GameState, Move> for PlayContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.current_move() != before.current_move() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: current move {} does not follow {}",
                after.current_move(),
                before.current_move()
            )));
        }
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
