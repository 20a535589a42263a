//! Display descriptors handed to the presentation layer verbatim.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::types::Mark;

/// Status line for the board currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game continues; `0` moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
    /// `0` completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board full, no line.
    #[display("It's a draw!")]
    Draw,
}

impl Status {
    /// Status for a board with `outcome` where `next` would move next.
    pub fn from_outcome(outcome: &Outcome, next: Mark) -> Self {
        match outcome {
            Outcome::InProgress => Status::NextPlayer(next),
            Outcome::Win { mark, .. } => Status::Winner(*mark),
            Outcome::Draw => Status::Draw,
        }
    }
}

/// Label for one entry of the move list.
///
/// The current entry is a heading; every other entry is a jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveLabel {
    /// Current entry is the empty board.
    #[display("Currently at game start")]
    CurrentlyAtStart,
    /// Current entry is move `0`.
    #[display("Currently at #{}", _0)]
    CurrentlyAt(usize),
    /// Jump target for the empty board.
    #[display("Go to game start")]
    GoToStart,
    /// Jump target for move `0`.
    #[display("Go to #{}", _0)]
    GoTo(usize),
}

impl MoveLabel {
    /// Label for history entry `index` when `current` is shown.
    pub fn for_entry(index: usize, current: usize) -> Self {
        match (index == current, index) {
            (true, 0) => MoveLabel::CurrentlyAtStart,
            (true, n) => MoveLabel::CurrentlyAt(n),
            (false, 0) => MoveLabel::GoToStart,
            (false, n) => MoveLabel::GoTo(n),
        }
    }

    /// History index this label refers to.
    pub fn index(&self) -> usize {
        match self {
            MoveLabel::CurrentlyAtStart | MoveLabel::GoToStart => 0,
            MoveLabel::CurrentlyAt(n) | MoveLabel::GoTo(n) => *n,
        }
    }

    /// Whether this is the entry currently shown.
    pub fn is_current(&self) -> bool {
        matches!(self, MoveLabel::CurrentlyAtStart | MoveLabel::CurrentlyAt(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::NextPlayer(Mark::O).to_string(), "Next player: O");
        assert_eq!(Status::Winner(Mark::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_move_label_text() {
        assert_eq!(MoveLabel::for_entry(0, 0).to_string(), "Currently at game start");
        assert_eq!(MoveLabel::for_entry(3, 3).to_string(), "Currently at #3");
        assert_eq!(MoveLabel::for_entry(0, 2).to_string(), "Go to game start");
        assert_eq!(MoveLabel::for_entry(1, 2).to_string(), "Go to #1");
    }

    #[test]
    fn test_move_label_index() {
        assert_eq!(MoveLabel::for_entry(4, 1).index(), 4);
        assert!(MoveLabel::for_entry(4, 4).is_current());
        assert!(!MoveLabel::for_entry(0, 4).is_current());
    }
}
