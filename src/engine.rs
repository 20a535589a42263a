//! Pure state transitions over boards and histories.
//!
//! Every function here takes its inputs by reference and returns new values;
//! nothing is mutated in place. [`GameState`](crate::GameState) composes these
//! into the turn-by-turn API.

use tracing::{debug, instrument, warn};

use crate::action::MoveError;
use crate::history::{History, JumpError};
use crate::position::Position;
use crate::types::{Board, Cell, Mark};

pub use crate::rules::evaluate;

/// Places `mark` at `pos`, returning the new board.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if `board` is already won or drawn.
/// - [`MoveError::SquareOccupied`] if the cell already holds a mark.
#[instrument(skip(board), fields(position = %pos, mark = %mark))]
pub fn apply_move(board: &Board, pos: Position, mark: Mark) -> Result<Board, MoveError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        warn!(%outcome, "Move rejected: game is over");
        return Err(MoveError::GameOver(outcome));
    }
    if !board.is_empty(pos) {
        warn!("Move rejected: square occupied");
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with(pos, Cell::Marked(mark)))
}

/// [`apply_move`] addressed by raw board index (0-8).
///
/// # Errors
///
/// [`MoveError::InvalidIndex`] for an index above 8, otherwise as [`apply_move`].
pub fn apply_move_at(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    let pos = Position::try_from(index)?;
    apply_move(board, pos, mark)
}

/// First `current_move + 1` entries of `history` with `board` appended.
pub fn truncate_and_append(history: &History, current_move: usize, board: Board) -> History {
    history.truncate_and_append(current_move, board)
}

/// Validates a jump target, returning the new current move.
///
/// # Errors
///
/// [`JumpError::OutOfRange`] if `index` is not in `[0, history.len() - 1]`.
#[instrument(skip(history), fields(len = history.len()))]
pub fn jump_to(history: &History, index: usize) -> Result<usize, JumpError> {
    history.board(index)?;
    debug!("Jump target accepted");
    Ok(index)
}
