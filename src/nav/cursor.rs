//! Cursor state machine over the flattened row sequence.

use super::rows::NavigableRow;

/// Cursor position over a flattened row sequence.
///
/// Two states: `Idle` (`None`, input focused, no row highlighted) and
/// row-focused (`Some(index)` into the current sequence). All transitions
/// are total: out-of-range input is clamped, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Option<usize>,
}

impl Cursor {
    /// The idle cursor.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Current position, `None` when idle.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Whether no row is highlighted.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.position.is_none()
    }

    /// Force the idle state.
    pub fn reset(&mut self) {
        self.position = None;
    }

    /// ArrowDown: idle enters the list at row 0; otherwise advance with
    /// clamping at the last row (no wraparound). No-op on an empty sequence.
    pub fn move_down(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.position = Some(match self.position {
            None => 0,
            Some(p) => (p + 1).min(row_count - 1),
        });
    }

    /// ArrowUp: row 0 returns to idle; otherwise retreat one row.
    pub fn move_up(&mut self) {
        self.position = match self.position {
            None | Some(0) => None,
            Some(p) => Some(p - 1),
        };
    }

    /// Re-attach the cursor after the row sequence changed.
    ///
    /// The previously-referenced row is looked up by identity in the new
    /// sequence; if it no longer exists (or the sequence is empty) the
    /// cursor falls back to idle.
    pub fn reattach(&mut self, old_rows: &[NavigableRow], new_rows: &[NavigableRow]) {
        self.position = self
            .position
            .and_then(|p| old_rows.get(p))
            .and_then(|row| new_rows.iter().position(|r| r == row));
    }
}
