//! Board outcomes and the winning lines that produce them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::position::Position;
use crate::types::Mark;

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

impl Line {
    /// The positions making up this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// First complete line in fixed enumeration order.
        line: Line,
    },
    /// All cells filled with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The logical phase this outcome belongs to.
    pub fn phase(&self) -> Phase {
        if self.is_terminal() {
            Phase::Terminal
        } else {
            Phase::InProgress
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, line } => {
                let [a, b, c] = line.indices();
                write!(f, "{} wins on [{}, {}, {}]", mark, a, b, c)
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// The two logical states of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Win or draw; moves are rejected.
    Terminal,
}
