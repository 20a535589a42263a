//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Rules never look at history or
//! whose turn it is; they only classify a position.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Classifies a board as in progress, won or drawn.
///
/// A win is reported for the first complete line in [`LINES`] order. A draw
/// requires no complete line and no empty cell.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Win { mark, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Line;
    use crate::position::Position;
    use crate::types::{Cell, Mark};

    fn board(marks: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (cell, ch) in cells.iter_mut().zip(marks.chars()) {
            *cell = match ch {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_win() {
        assert_eq!(
            evaluate(&board("XXXOO....")),
            Outcome::Win {
                mark: Mark::X,
                line: Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
            }
        );
    }

    #[test]
    fn test_full_board_with_win_is_not_draw() {
        // X X X / O O X / X O O
        let outcome = evaluate(&board("XXXOOXXOO"));
        assert_eq!(outcome.winner(), Some(Mark::X));
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_first_line_in_order_wins_highlight() {
        // X completes both the top row and the left column.
        let outcome = evaluate(&board("XXXXOOXOO"));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }
}
