//! Board snapshots, one per move, rooted at the empty board.

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::action::Move;
use crate::position::Position;
use crate::types::{Board, Cell};

/// Errors from navigating history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// Index outside `[0, len - 1]`.
    #[display("Move index {index} is outside history (0..{len})")]
    OutOfRange {
        /// Requested move index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Ordered board snapshots. Entry 0 is always the empty board and entry `i`
/// is the board after `i` moves.
///
/// Snapshots are stored by value, so no two entries share storage and an
/// entry cannot change after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// A history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves played + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the root snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot after `index` moves.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Snapshot after `index` moves, or [`JumpError::OutOfRange`].
    pub fn board(&self, index: usize) -> Result<&Board, JumpError> {
        self.snapshots.get(index).ok_or(JumpError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// All snapshots in move order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns a new history holding the first `current_move + 1` snapshots
    /// followed by `board`. Snapshots after `current_move` are discarded.
    ///
    /// A `current_move` past the end keeps every snapshot.
    #[instrument(skip(self, board), fields(len = self.len()))]
    pub fn truncate_and_append(&self, current_move: usize, board: Board) -> History {
        let keep = current_move.saturating_add(1).min(self.len());
        if keep < self.len() {
            debug!(
                discarded = self.len() - keep,
                "Discarding future branch of history"
            );
        }
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(board);
        History { snapshots }
    }

    /// The move that produced snapshot `index`, recovered by diffing it
    /// with the previous snapshot. `None` for the root or when the two
    /// snapshots do not differ by exactly one newly marked cell.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let after = self.snapshots.get(index)?;

        let mut changed = Position::iter().filter(|pos| before.get(*pos) != after.get(*pos));
        let pos = changed.next()?;
        if changed.next().is_some() {
            return None;
        }
        match (before.get(pos), after.get(pos)) {
            (Cell::Empty, Cell::Marked(mark)) => Some(Move::new(mark, pos)),
            _ => None,
        }
    }

    /// Moves that produced snapshots `1..len`, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.len()).filter_map(|i| self.move_at(i)).collect()
    }

    /// Pushes a snapshot without any checks. Only used to corrupt state in tests.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Mutable snapshot access. Only used to corrupt state in tests.
    #[cfg(test)]
    pub(crate) fn snapshot_mut(&mut self, index: usize) -> &mut Board {
        &mut self.snapshots[index]
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
