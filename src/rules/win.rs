//! Win detection logic for tic-tac-toe.

use crate::outcome::Line;
use crate::position::Position;
use crate::types::{Board, Mark};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first complete line and its mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        match cell.mark() {
            Some(mark) if cell == board.get(b) && cell == board.get(c) => Some((mark, *line)),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
