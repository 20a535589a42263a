//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Cell};

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
