//! Named board positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::types::Board;

/// A position on the tic-tac-toe board.
///
/// Index mapping is row-major: `row = index / 3`, `col = index % 3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// Grid row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Grid column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from grid coordinates.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Parse from label or number (0-8).
    ///
    /// Labels match case-insensitively, so `"center"` and `"Top-left"` both work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        Position::iter().find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Returns only the empty positions of `board`, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::action::MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(crate::action::MoveError::InvalidIndex(index))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
