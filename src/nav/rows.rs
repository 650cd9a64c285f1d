//! Flattening the tree into navigable rows.

use serde::Serialize;

use crate::filter::FilterState;
use crate::model::TeamTree;

/// One navigable row in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavigableRow {
    /// A team header row.
    #[serde(rename_all = "camelCase")]
    Team {
        /// Id of the team this row represents.
        team_id: String,
    },
    /// A channel row under an expanded team.
    #[serde(rename_all = "camelCase")]
    Channel {
        /// Id of the owning team.
        team_id: String,
        /// Id of the channel.
        channel_id: String,
    },
}

impl NavigableRow {
    /// Id of the team this row belongs to.
    #[must_use]
    pub fn team_id(&self) -> &str {
        match self {
            Self::Team { team_id } | Self::Channel { team_id, .. } => team_id,
        }
    }

    /// Whether this is a channel row.
    #[must_use]
    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel { .. })
    }
}

/// Flatten the currently-visible tree into an ordered row sequence.
///
/// Walks teams in tree order, emitting a team row for each visible team and,
/// when the team is display-expanded (stored flag, or forced by an active
/// filter), one channel row per visible channel in channel order.
#[must_use]
pub fn flatten(tree: &TeamTree, filter: &FilterState) -> Vec<NavigableRow> {
    let mut rows = Vec::new();

    for team in tree.teams() {
        if !filter.team_visible(team) {
            continue;
        }
        rows.push(NavigableRow::Team {
            team_id: team.id.clone(),
        });
        if !filter.team_display_expanded(team) {
            continue;
        }
        for channel in &team.channels {
            if filter.channel_visible(&team.id, &channel.id) {
                rows.push(NavigableRow::Channel {
                    team_id: team.id.clone(),
                    channel_id: channel.id.clone(),
                });
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::model::{Channel, Team};

    fn sample_tree() -> TeamTree {
        TeamTree::from_teams(vec![
            Team::new("a", "Team A")
                .with_expanded(true)
                .with_channel(Channel::new("a1", "General"))
                .with_channel(Channel::new("a2", "Random")),
            Team::new("b", "Team B").with_channel(Channel::new("b1", "Ops")),
        ])
    }

    fn team_row(team_id: &str) -> NavigableRow {
        NavigableRow::Team {
            team_id: team_id.to_string(),
        }
    }

    fn channel_row(team_id: &str, channel_id: &str) -> NavigableRow {
        NavigableRow::Channel {
            team_id: team_id.to_string(),
            channel_id: channel_id.to_string(),
        }
    }

    #[test]
    fn test_flatten_unfiltered_respects_stored_expansion() {
        let tree = sample_tree();
        let rows = flatten(&tree, &FilterState::empty());
        assert_eq!(
            rows,
            vec![
                team_row("a"),
                channel_row("a", "a1"),
                channel_row("a", "a2"),
                team_row("b"),
            ]
        );
    }

    #[test]
    fn test_flatten_with_query_hides_non_matching_teams() {
        let tree = sample_tree();
        let state = filter::filter(&tree, "gen");
        let rows = flatten(&tree, &state);
        assert_eq!(rows, vec![team_row("a"), channel_row("a", "a1")]);
    }

    #[test]
    fn test_flatten_no_matches_is_empty() {
        let tree = sample_tree();
        let state = filter::filter(&tree, "zz");
        assert!(flatten(&tree, &state).is_empty());
    }

    #[test]
    fn test_flatten_forces_collapsed_matching_team_open() {
        let tree = sample_tree();
        // Team B is collapsed, but "ops" matches its channel.
        let state = filter::filter(&tree, "ops");
        let rows = flatten(&tree, &state);
        assert_eq!(rows, vec![team_row("b"), channel_row("b", "b1")]);
    }
}
