//! No move follows a won or drawn board.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate;

/// Invariant: only the newest snapshot may be terminal.
pub struct FrozenAfterEndInvariant;

impl Invariant<GameState> for FrozenAfterEndInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();
        let (_, earlier) = match snapshots.split_last() {
            Some(split) => split,
            None => return false,
        };
        earlier.iter().all(|board| !evaluate(board).is_terminal())
    }

    fn description() -> &'static str {
        "No move is played after the game ends"
    }
}
