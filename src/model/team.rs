//! Team and channel node types.

use serde::{Deserialize, Serialize};

/// A selectable channel nested under exactly one team.
///
/// Immutable once loaded; owned by its parent [`Team`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Stable channel identifier.
    pub id: String,
    /// Name shown to the user and matched by search.
    pub display_name: String,
}

impl Channel {
    /// Create a new channel.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A top-level grouping entity owning zero or more channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Stable team identifier. Teams are unique by id within a tree.
    pub id: String,
    /// Name shown to the user.
    pub display_name: String,
    /// Channels in display order.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Whether the team's channel list is expanded.
    ///
    /// Mutated only by navigation/controller logic, never by the loader.
    #[serde(skip)]
    pub expanded: bool,
}

impl Team {
    /// Create a new collapsed team.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            channels: Vec::new(),
            expanded: false,
        }
    }

    /// Add a channel, builder-style.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Mark the team expanded, builder-style.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Look up a channel by id.
    #[must_use]
    pub fn channel(&self, channel_id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == channel_id)
    }
}
