//! Alternating marks invariant: first player, opponent, first player, ...

use super::Invariant;
use crate::GameState;

/// Invariant: move `i` (1-based) places the first player's mark when `i` is
/// odd and the opponent's mark when `i` is even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let first = *game.config().first_player();
        game.history().moves().iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { first } else { first.opponent() };
            mv.mark == expected
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with the first player"
    }
}
