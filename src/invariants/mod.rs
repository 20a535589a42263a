//! First-class invariants over game history.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). They are checked after each move when
//! [`EngineConfig::verify_invariants`](crate::EngineConfig) is set, and can be
//! tested independently.

// ─────────────────────────────────────────────────────────────
//  Invariant Trait
// ─────────────────────────────────────────────────────────────

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariant Sets
// ─────────────────────────────────────────────────────────────

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

// ─────────────────────────────────────────────────────────────
//  History Invariants
// ─────────────────────────────────────────────────────────────

pub mod alternating_marks;
pub mod empty_root;
pub mod frozen_after_end;
pub mod monotonic_history;
pub mod move_count;

pub use alternating_marks::AlternatingMarksInvariant;
pub use empty_root::EmptyRootInvariant;
pub use frozen_after_end::FrozenAfterEndInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use move_count::MoveCountInvariant;

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    EmptyRootInvariant,
    MonotonicHistoryInvariant,
    AlternatingMarksInvariant,
    MoveCountInvariant,
    FrozenAfterEndInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameState::replay(&[Position::Center]).unwrap();
        game.history_mut()
            .snapshot_mut(1)
            .set(Position::TopLeft, crate::Cell::Marked(Mark::O));

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description == MonotonicHistoryInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyRootInvariant, MoveCountInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
