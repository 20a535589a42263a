//! Monotonic history invariant: each step marks exactly one empty cell.

use super::Invariant;
use crate::GameState;

/// Invariant: consecutive snapshots differ by one cell going from empty to
/// marked, and no marked cell ever changes.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        (1..history.len()).all(|i| history.move_at(i).is_some())
    }

    fn description() -> &'static str {
        "Each move marks exactly one empty cell and never overwrites"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
            Position::TopRight,
        ])
        .unwrap();
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        game.history_mut()
            .snapshot_mut(2)
            .set(Position::Center, Cell::Marked(Mark::O));
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = GameState::new();
        let board = game
            .board()
            .with(Position::Center, Cell::Marked(Mark::X))
            .with(Position::TopLeft, Cell::Marked(Mark::O));
        game.history_mut().push_unchecked(board);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
