//! Single-selection model.
//!
//! Holds at most one (team, channel) pair. A channel is only ever stored
//! together with its owning team, so the pair invariant from the data model
//! is structural here.

use serde::Serialize;

use crate::model::{Channel, Team};

/// The currently chosen (team, channel) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPair {
    /// The owning team.
    pub team: Team,
    /// The chosen channel, guaranteed to belong to `team.channels`.
    pub channel: Channel,
}

/// Single-selection holder with replace-on-select semantics.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    current: Option<SelectedPair>,
}

impl SelectionModel {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection to exactly this pair, replacing any prior one.
    pub fn select(&mut self, team: Team, channel: Channel) -> &SelectedPair {
        self.current.insert(SelectedPair { team, channel })
    }

    /// Empty the selection. Idempotent.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// The current pair, if any.
    #[must_use]
    pub fn current(&self) -> Option<&SelectedPair> {
        self.current.as_ref()
    }
}
