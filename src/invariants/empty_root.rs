//! Root invariant: history starts at the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: snapshot 0 is the empty board.
pub struct EmptyRootInvariant;

impl Invariant<GameState> for EmptyRootInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyRootInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut game = GameState::new();
        game.history_mut()
            .snapshot_mut(0)
            .set(Position::Center, Cell::Marked(Mark::X));
        assert!(!EmptyRootInvariant::holds(&game));
    }
}
