//! Incremental search over the team/channel tree.
//!
//! Matching is a case-insensitive substring test against channel display
//! names. A team is visible under an active query iff at least one of its
//! channels matches; visible teams are treated as expanded for display
//! purposes regardless of their stored flag. The computed [`FilterState`]
//! is derived data: it is recomputed on every committed query change and
//! never partially updated.

use std::collections::HashSet;

use crate::model::{Team, TeamTree};

/// Derived visibility state for one committed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// The committed query this state was computed for.
    pub query: String,
    /// Teams with at least one matching channel.
    pub visible_team_ids: HashSet<String>,
    /// Matching channels, keyed by (team id, channel id).
    pub matching_channel_ids: HashSet<(String, String)>,
    /// True when a non-empty query matched nothing anywhere.
    ///
    /// Distinct from "tree not yet loaded": it is only set after filtering
    /// an actual tree.
    pub no_matches: bool,
}

impl FilterState {
    /// The empty-query state: every team visible, nothing highlighted.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a query is currently in force.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether a team is visible under this filter.
    #[must_use]
    pub fn team_visible(&self, team: &Team) -> bool {
        !self.is_active() || self.visible_team_ids.contains(&team.id)
    }

    /// Whether a team's channel list should be shown.
    ///
    /// While a query is active, visible teams are forced open so their
    /// matching channels are reachable; otherwise the stored flag wins.
    #[must_use]
    pub fn team_display_expanded(&self, team: &Team) -> bool {
        if self.is_active() {
            self.visible_team_ids.contains(&team.id)
        } else {
            team.expanded
        }
    }

    /// Whether a specific channel is shown under this filter.
    #[must_use]
    pub fn channel_visible(&self, team_id: &str, channel_id: &str) -> bool {
        !self.is_active()
            || self
                .matching_channel_ids
                .contains(&(team_id.to_string(), channel_id.to_string()))
    }
}

/// Three-part decomposition of a matched display name.
///
/// `matched` is the original-case substring at the first match location;
/// `prefix` and `suffix` are empty when the match touches the respective end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Text before the match.
    pub prefix: String,
    /// The matched span, original case.
    pub matched: String,
    /// Text after the match.
    pub suffix: String,
}

/// Compute the filter state for a query over a tree.
///
/// An empty query yields [`FilterState::empty`]: every team visible and the
/// stored expand flags left in force.
#[must_use]
pub fn filter(tree: &TeamTree, query: &str) -> FilterState {
    if query.is_empty() {
        return FilterState::empty();
    }

    let mut state = FilterState {
        query: query.to_string(),
        ..FilterState::default()
    };

    for team in tree.teams() {
        for channel in &team.channels {
            if matches(&channel.display_name, query) {
                state.visible_team_ids.insert(team.id.clone());
                state
                    .matching_channel_ids
                    .insert((team.id.clone(), channel.id.clone()));
            }
        }
    }

    state.no_matches = state.visible_team_ids.is_empty();
    state
}

/// Case-insensitive substring test.
#[must_use]
pub fn matches(haystack: &str, needle: &str) -> bool {
    find(haystack, needle).is_some()
}

/// Decompose a display name around the first match of `query`.
///
/// Returns `None` when the query is empty or does not occur.
#[must_use]
pub fn highlight(display_name: &str, query: &str) -> Option<Highlight> {
    if query.is_empty() {
        return None;
    }
    let (start, len) = find(display_name, query)?;
    let chars: Vec<char> = display_name.chars().collect();

    Some(Highlight {
        prefix: chars[..start].iter().collect(),
        matched: chars[start..start + len].iter().collect(),
        suffix: chars[start + len..].iter().collect(),
    })
}

/// Find the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Works in char coordinates so the highlight decomposition never splits a
/// multi-byte character. Returns (start, length) in chars.
fn find(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let hay: Vec<char> = haystack.chars().collect();
    let ndl: Vec<char> = needle.chars().collect();
    if ndl.len() > hay.len() {
        return None;
    }

    for start in 0..=(hay.len() - ndl.len()) {
        let hit = hay[start..start + ndl.len()]
            .iter()
            .zip(&ndl)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));
        if hit {
            return Some((start, ndl.len()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_empty_query_leaves_everything_visible() {
        let tree = sample_tree();
        let state = filter(&tree, "");
        assert!(!state.is_active());
        assert!(!state.no_matches);
        for team in tree.teams() {
            assert!(state.team_visible(team));
        }
        // Stored flags win when no query is active.
        assert!(state.team_display_expanded(tree.team("a").unwrap()));
        assert!(!state.team_display_expanded(tree.team("b").unwrap()));
    }

    #[test]
    fn test_matching_team_forced_open() {
        let tree = sample_tree();
        let state = filter(&tree, "gen");

        assert!(state.visible_team_ids.contains("a"));
        assert!(!state.visible_team_ids.contains("b"));
        assert!(state
            .matching_channel_ids
            .contains(&("a".to_string(), "a1".to_string())));
        assert!(!state.no_matches);

        // Team B is collapsed and hidden; Team A is forced open even though
        // its stored flag would not matter here.
        assert!(state.team_display_expanded(tree.team("a").unwrap()));
        assert!(!state.team_visible(tree.team("b").unwrap()));
    }

    #[test]
    fn test_no_matches_is_terminal_state() {
        let tree = sample_tree();
        let state = filter(&tree, "zz");
        assert!(state.no_matches);
        assert!(state.visible_team_ids.is_empty());
        assert!(state.matching_channel_ids.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(matches("General", "GEN"));
        assert!(matches("General", "eral"));
        assert!(!matches("General", "xyz"));
    }

    #[test]
    fn test_highlight_at_start() {
        let h = highlight("General", "gen").unwrap();
        assert_eq!(h.prefix, "");
        assert_eq!(h.matched, "Gen");
        assert_eq!(h.suffix, "eral");
    }

    #[test]
    fn test_highlight_at_end() {
        let h = highlight("General", "RAL").unwrap();
        assert_eq!(h.prefix, "Gene");
        assert_eq!(h.matched, "ral");
        assert_eq!(h.suffix, "");
    }

    #[test]
    fn test_highlight_in_middle_first_occurrence_only() {
        let h = highlight("abcabc", "b").unwrap();
        assert_eq!(h.prefix, "a");
        assert_eq!(h.matched, "b");
        assert_eq!(h.suffix, "cabc");
    }

    #[test]
    fn test_highlight_multibyte_safe() {
        let h = highlight("Café Chat", "chat").unwrap();
        assert_eq!(h.prefix, "Café ");
        assert_eq!(h.matched, "Chat");
        assert_eq!(h.suffix, "");
    }

    #[test]
    fn test_highlight_absent() {
        assert!(highlight("General", "zz").is_none());
        assert!(highlight("General", "").is_none());
    }
}
