//! Move count invariant: snapshot `i` holds exactly `i` marks.

use super::Invariant;
use crate::GameState;

/// Invariant: the number of marks on snapshot `i` equals `i`, and the
/// current move points inside history.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        game.current_move() < history.len()
            && history
                .snapshots()
                .iter()
                .enumerate()
                .all(|(i, board)| board.marks_placed() == i)
    }

    fn description() -> &'static str {
        "Marks placed equal moves played"
    }
}
