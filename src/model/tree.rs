//! The team tree: ordered, id-unique collection of teams.

use indexmap::IndexMap;
use tracing::warn;

use super::team::{Channel, Team};

/// Ordered collection of teams, unique by id.
///
/// Insertion order is load order and never changes during a session; only
/// the per-team `expanded` flags are mutable. Created once per directory
/// load and replaced wholesale on reload.
#[derive(Debug, Clone, Default)]
pub struct TeamTree {
    teams: IndexMap<String, Team>,
}

impl TeamTree {
    /// Create an empty tree (the "not yet loaded" state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from loaded teams, preserving order.
    ///
    /// A duplicate team id keeps the first occurrence and drops the rest.
    #[must_use]
    pub fn from_teams(teams: Vec<Team>) -> Self {
        let mut map = IndexMap::with_capacity(teams.len());
        for team in teams {
            if map.contains_key(&team.id) {
                warn!(team_id = %team.id, "duplicate team id in directory response, dropping");
                continue;
            }
            map.insert(team.id.clone(), team);
        }
        Self { teams: map }
    }

    /// Iterate teams in load order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// Look up a team by id.
    #[must_use]
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.get(team_id)
    }

    /// Look up a channel within a team.
    #[must_use]
    pub fn channel(&self, team_id: &str, channel_id: &str) -> Option<&Channel> {
        self.team(team_id).and_then(|t| t.channel(channel_id))
    }

    /// Flip a team's expand/collapse flag.
    ///
    /// Has no effect on any active filter, which computes its own display
    /// expansion independently. Returns false if the team does not exist.
    pub fn toggle_expand(&mut self, team_id: &str) -> bool {
        match self.teams.get_mut(team_id) {
            Some(team) => {
                team.expanded = !team.expanded;
                true
            }
            None => false,
        }
    }

    /// Number of teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the tree holds no teams.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TeamTree {
        TeamTree::from_teams(vec![
            Team::new("a", "Team A")
                .with_channel(Channel::new("a1", "General"))
                .with_channel(Channel::new("a2", "Random")),
            Team::new("b", "Team B").with_channel(Channel::new("b1", "Ops")),
        ])
    }

    #[test]
    fn test_order_preserved() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree.teams().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_team_ids_dropped() {
        let tree = TeamTree::from_teams(vec![
            Team::new("a", "First"),
            Team::new("a", "Second"),
            Team::new("b", "Other"),
        ]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.team("a").unwrap().display_name, "First");
    }

    #[test]
    fn test_toggle_expand() {
        let mut tree = sample_tree();
        assert!(!tree.team("a").unwrap().expanded);
        assert!(tree.toggle_expand("a"));
        assert!(tree.team("a").unwrap().expanded);
        assert!(tree.toggle_expand("a"));
        assert!(!tree.team("a").unwrap().expanded);
        assert!(!tree.toggle_expand("missing"));
    }

    #[test]
    fn test_channel_lookup_scoped_to_team() {
        let tree = sample_tree();
        assert!(tree.channel("a", "a2").is_some());
        assert!(tree.channel("b", "a2").is_none());
    }
}
