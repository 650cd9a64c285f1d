//! Inbound and outbound picker events.

use crate::model::Team;
use crate::selection::SelectedPair;

/// Events the host layer feeds into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerInput {
    /// Directional key: move the cursor down one row.
    ArrowDown,
    /// Directional key: move the cursor up one row (row 0 returns to idle).
    ArrowUp,
    /// Commit action (Enter or Tab) on the row at the cursor.
    Commit,
    /// Escape: clear in-progress query text and force the idle cursor.
    Escape,
    /// A character typed into the search input.
    Char(char),
    /// Backspace in the search input. On an empty query with a non-empty
    /// selection this clears the selection instead of editing text.
    Backspace,
    /// Quiet period elapsed; commit this query to the filter.
    ///
    /// Normally produced by the controller's own debounce timer and fed
    /// back through the feedback channel.
    QueryCommitted(String),
    /// Pointer click on a rendered team row.
    ClickTeam {
        /// Id of the clicked team.
        team_id: String,
    },
    /// Pointer click on a rendered channel row.
    ClickChannel {
        /// Id of the owning team.
        team_id: String,
        /// Id of the clicked channel.
        channel_id: String,
    },
    /// The picker input gained focus; reopen the row list (visual only).
    FocusGained,
    /// The picker lost focus; collapse the row list visually. Selection,
    /// query, and cursor are untouched and resume identically on refocus.
    FocusLost,
    /// The directory load finished with this tree.
    DirectoryLoaded(Vec<Team>),
    /// The directory load failed; carries a user-facing reason.
    DirectoryFailed(String),
    /// Provider/auth context changed; the tree must be reloaded wholesale.
    Reload,
}

/// Notifications the controller emits for the host layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// The selection changed; `None` means it was cleared.
    SelectionChanged(Option<SelectedPair>),
    /// The host should re-run the directory load.
    ReloadRequested,
}
