//! The picker controller state machine.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::debounce::{Debouncer, SEARCH_QUIET_PERIOD};
use crate::directory::DirectoryProvider;
use crate::filter::{self, FilterState, Highlight};
use crate::model::{Channel, TeamTree};
use crate::nav::{flatten, Cursor, NavigableRow};
use crate::selection::{SelectedPair, SelectionModel};

use super::event::{PickerEvent, PickerInput};

/// Lifecycle phase of the directory load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Load in flight; the tree is not yet usable.
    Loading,
    /// Tree loaded and navigable.
    Ready,
    /// Load failed; carries a user-facing reason. Terminal until the host
    /// re-invokes the load.
    Failed(String),
}

/// Snapshot of everything the renderer needs to draw the picker.
///
/// The renderer must not re-derive any of this; in particular, the row
/// sequence and cursor here are the only valid navigation coordinates.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    /// The loaded tree (for display names).
    pub tree: &'a TeamTree,
    /// Flattened, filter-and-expansion-aware row sequence.
    pub rows: &'a [NavigableRow],
    /// Cursor position into `rows`, `None` when idle.
    pub cursor: Option<usize>,
    /// Active filter state.
    pub filter: &'a FilterState,
    /// Current selection, if any.
    pub selection: Option<&'a SelectedPair>,
    /// In-progress (not yet committed) query text.
    pub query: &'a str,
    /// Whether the directory load is in flight.
    pub is_loading: bool,
    /// Load failure reason, if the load failed.
    pub error: Option<&'a str>,
    /// Whether the row list is visually open (focus-driven).
    pub list_open: bool,
}

impl RenderState<'_> {
    /// Highlight decomposition for a channel under the committed query.
    #[must_use]
    pub fn highlight_for(&self, channel: &Channel) -> Option<Highlight> {
        if !self.filter.is_active() {
            return None;
        }
        filter::highlight(&channel.display_name, &self.filter.query)
    }

    /// Whether the committed query matched nothing.
    #[must_use]
    pub fn no_matches(&self) -> bool {
        self.filter.no_matches
    }
}

/// Orchestrates filter, navigation, and selection for one picker instance.
///
/// Each instance owns its tree, filter, cursor, and selection exclusively;
/// there is no shared mutable state across pickers.
#[derive(Debug)]
pub struct PickerController {
    tree: TeamTree,
    filter: FilterState,
    rows: Vec<NavigableRow>,
    cursor: Cursor,
    selection: SelectionModel,
    raw_query: String,
    committed_query: String,
    phase: LoadPhase,
    list_open: bool,
    debounce: Debouncer,
    feedback_tx: UnboundedSender<PickerInput>,
    events: Vec<PickerEvent>,
}

impl PickerController {
    /// Create a controller with the default search quiet period.
    ///
    /// Returns the controller and the feedback receiver the host must drain
    /// into [`PickerController::handle`]; the debounce timer delivers
    /// committed queries through it.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<PickerInput>) {
        Self::with_quiet_period(SEARCH_QUIET_PERIOD)
    }

    /// Create a controller with a custom search quiet period.
    #[must_use]
    pub fn with_quiet_period(quiet_period: Duration) -> (Self, UnboundedReceiver<PickerInput>) {
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        let controller = Self {
            tree: TeamTree::new(),
            filter: FilterState::empty(),
            rows: Vec::new(),
            cursor: Cursor::idle(),
            selection: SelectionModel::new(),
            raw_query: String::new(),
            committed_query: String::new(),
            phase: LoadPhase::Loading,
            list_open: true,
            debounce: Debouncer::new(quiet_period),
            feedback_tx,
            events: Vec::new(),
        };
        (controller, feedback_rx)
    }

    /// Run the directory load through a provider and apply the outcome.
    ///
    /// Convenience for hosts: equivalent to feeding `DirectoryLoaded` or
    /// `DirectoryFailed` by hand.
    pub fn load_from(&mut self, provider: &dyn DirectoryProvider) {
        self.phase = LoadPhase::Loading;
        match provider.load_teams_with_channels() {
            Ok(teams) => self.handle(PickerInput::DirectoryLoaded(teams)),
            Err(e) => self.handle(PickerInput::DirectoryFailed(e.to_string())),
        }
    }

    /// Process one inbound event to completion.
    pub fn handle(&mut self, input: PickerInput) {
        match input {
            PickerInput::ArrowDown => self.cursor.move_down(self.rows.len()),
            PickerInput::ArrowUp => self.cursor.move_up(),
            PickerInput::Commit => self.commit(),
            PickerInput::Escape => self.escape(),
            PickerInput::Char(c) => {
                self.raw_query.push(c);
                self.schedule_query_commit();
            }
            PickerInput::Backspace => self.backspace(),
            PickerInput::QueryCommitted(query) => self.apply_query(query),
            PickerInput::ClickTeam { team_id } => {
                if self.tree.toggle_expand(&team_id) {
                    self.refresh_rows();
                }
            }
            PickerInput::ClickChannel {
                team_id,
                channel_id,
            } => self.select_channel(&team_id, &channel_id),
            PickerInput::FocusGained => self.list_open = true,
            PickerInput::FocusLost => self.list_open = false,
            PickerInput::DirectoryLoaded(teams) => {
                debug!(count = teams.len(), "directory loaded");
                self.replace_tree(TeamTree::from_teams(teams), LoadPhase::Ready);
            }
            PickerInput::DirectoryFailed(reason) => {
                warn!(%reason, "directory load failed");
                self.replace_tree(TeamTree::new(), LoadPhase::Failed(reason));
            }
            PickerInput::Reload => {
                self.phase = LoadPhase::Loading;
                self.events.push(PickerEvent::ReloadRequested);
            }
        }
    }

    /// A sender feeding into this controller's input stream.
    ///
    /// Lets hosts route their own deferred triggers (e.g. a debounced
    /// reload) through the same channel as the query commits.
    #[must_use]
    pub fn feedback_sender(&self) -> UnboundedSender<PickerInput> {
        self.feedback_tx.clone()
    }

    /// Take all outbound notifications accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current render-state snapshot.
    #[must_use]
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            tree: &self.tree,
            rows: &self.rows,
            cursor: self.cursor.position(),
            filter: &self.filter,
            selection: self.selection.current(),
            query: &self.raw_query,
            is_loading: self.phase == LoadPhase::Loading,
            error: match &self.phase {
                LoadPhase::Failed(reason) => Some(reason.as_str()),
                _ => None,
            },
            list_open: self.list_open,
        }
    }

    /// Commit action on the row at the cursor.
    ///
    /// A team row toggles that team's expansion and keeps the cursor on it;
    /// a channel row becomes the selection and the picker collapses to its
    /// compact chosen view. A stale cursor reference is re-clamped to idle,
    /// never surfaced to the caller.
    fn commit(&mut self) {
        let Some(position) = self.cursor.position() else {
            return;
        };
        let Some(row) = self.rows.get(position).cloned() else {
            warn!(position, "commit on stale cursor, resetting to idle");
            self.cursor.reset();
            return;
        };

        match row {
            NavigableRow::Team { team_id } => {
                self.tree.toggle_expand(&team_id);
                self.refresh_rows();
            }
            NavigableRow::Channel {
                team_id,
                channel_id,
            } => self.select_channel(&team_id, &channel_id),
        }
    }

    /// Select a channel by id pair and emit the change notification.
    fn select_channel(&mut self, team_id: &str, channel_id: &str) {
        let Some(team) = self.tree.team(team_id) else {
            warn!(%team_id, "selection references unknown team, ignoring");
            self.cursor.reset();
            return;
        };
        let Some(channel) = team.channel(channel_id) else {
            warn!(%team_id, %channel_id, "selection references unknown channel, ignoring");
            self.cursor.reset();
            return;
        };

        let pair = self
            .selection
            .select(team.clone(), channel.clone())
            .clone();
        debug!(team = %pair.team.display_name, channel = %pair.channel.display_name, "selected");
        self.events.push(PickerEvent::SelectionChanged(Some(pair)));
        self.cursor.reset();
        self.list_open = false;
    }

    /// Escape: drop in-progress query text and force the idle cursor.
    /// The selection is untouched.
    fn escape(&mut self) {
        self.debounce.cancel();
        self.raw_query.clear();
        self.committed_query.clear();
        self.filter = FilterState::empty();
        self.refresh_rows();
        self.cursor.reset();
    }

    /// Backspace: edit the query, or clear the selection when the query is
    /// already empty.
    fn backspace(&mut self) {
        if self.raw_query.is_empty() {
            if !self.selection.is_empty() {
                self.clear_selection();
            }
            return;
        }
        self.raw_query.pop();
        self.schedule_query_commit();
    }

    /// Empty the selection, reset filter-induced expansion, clear the query,
    /// and notify. Stored expand flags are left as the user set them.
    fn clear_selection(&mut self) {
        self.selection.clear();
        self.debounce.cancel();
        self.raw_query.clear();
        self.committed_query.clear();
        self.filter = FilterState::empty();
        self.refresh_rows();
        self.cursor.reset();
        self.events.push(PickerEvent::SelectionChanged(None));
    }

    /// Arm the debounce timer to commit the current raw query.
    fn schedule_query_commit(&mut self) {
        let query = self.raw_query.clone();
        let tx = self.feedback_tx.clone();
        self.debounce.schedule(move || {
            let _ = tx.send(PickerInput::QueryCommitted(query));
        });
    }

    /// Apply a committed query: recompute the filter and re-clamp the cursor.
    fn apply_query(&mut self, query: String) {
        if query == self.committed_query {
            return;
        }
        debug!(%query, "query committed");
        self.committed_query = query.clone();
        self.filter = if query.is_empty() {
            FilterState::empty()
        } else {
            filter::filter(&self.tree, &query)
        };
        self.refresh_rows();
    }

    /// Replace the tree wholesale and reset all derived and selection state.
    fn replace_tree(&mut self, tree: TeamTree, phase: LoadPhase) {
        let had_selection = !self.selection.is_empty();
        self.tree = tree;
        self.phase = phase;
        self.debounce.cancel();
        self.raw_query.clear();
        self.committed_query.clear();
        self.filter = FilterState::empty();
        self.selection.clear();
        self.rows = flatten(&self.tree, &self.filter);
        self.cursor.reset();
        if had_selection {
            self.events.push(PickerEvent::SelectionChanged(None));
        }
    }

    /// Rebuild the row sequence and re-attach the cursor by row identity.
    fn refresh_rows(&mut self) {
        let old_rows = std::mem::take(&mut self.rows);
        self.rows = flatten(&self.tree, &self.filter);
        self.cursor.reattach(&old_rows, &self.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, Team};

    fn sample_teams() -> Vec<Team> {
        vec![
            Team::new("a", "Team A")
                .with_expanded(true)
                .with_channel(Channel::new("a1", "General"))
                .with_channel(Channel::new("a2", "Random")),
            Team::new("b", "Team B").with_channel(Channel::new("b1", "Ops")),
        ]
    }

    fn loaded_controller() -> PickerController {
        let (mut controller, _rx) = PickerController::new();
        controller.handle(PickerInput::DirectoryLoaded(sample_teams()));
        controller
    }

    #[test]
    fn test_loading_phase_until_directory_arrives() {
        let (controller, _rx) = PickerController::new();
        let state = controller.render_state();
        assert!(state.is_loading);
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_load_failure_is_error_render_state() {
        let (mut controller, _rx) = PickerController::new();
        controller.handle(PickerInput::DirectoryFailed("auth expired".to_string()));
        let state = controller.render_state();
        assert!(!state.is_loading);
        assert_eq!(state.error, Some("auth expired"));
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_commit_on_team_row_toggles_expansion() {
        let mut controller = loaded_controller();
        // Rows: [A, A/General, A/Random, B]; move to B and commit.
        for _ in 0..4 {
            controller.handle(PickerInput::ArrowDown);
        }
        controller.handle(PickerInput::Commit);

        let state = controller.render_state();
        assert_eq!(state.rows.len(), 5);
        // Cursor stays on the same team row.
        assert_eq!(state.cursor, Some(3));
        assert!(state.selection.is_none());
    }

    #[test]
    fn test_commit_on_channel_row_selects_and_idles() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ArrowDown);
        controller.handle(PickerInput::ArrowDown); // ChannelRow(a, General)
        controller.handle(PickerInput::Commit);

        let events = controller.drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            PickerEvent::SelectionChanged(Some(pair)) => {
                assert_eq!(pair.team.id, "a");
                assert_eq!(pair.channel.id, "a1");
            }
            other => panic!("unexpected event: {other:?}"),
        }

        let state = controller.render_state();
        assert_eq!(state.cursor, None);
        assert!(!state.list_open);
    }

    #[test]
    fn test_commit_while_idle_is_noop() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::Commit);
        assert!(controller.drain_events().is_empty());
        assert!(controller.render_state().selection.is_none());
    }

    #[test]
    fn test_query_filters_and_query_clear_restores() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::QueryCommitted("gen".to_string()));

        let state = controller.render_state();
        assert_eq!(state.rows.len(), 2);
        assert!(state.filter.visible_team_ids.contains("a"));

        controller.handle(PickerInput::QueryCommitted(String::new()));
        assert_eq!(controller.render_state().rows.len(), 4);
    }

    #[test]
    fn test_identical_committed_query_is_noop() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::QueryCommitted("gen".to_string()));
        controller.handle(PickerInput::ArrowDown);
        controller.handle(PickerInput::ArrowDown);
        let before = controller.render_state().cursor;

        controller.handle(PickerInput::QueryCommitted("gen".to_string()));
        assert_eq!(controller.render_state().cursor, before);
    }

    #[test]
    fn test_cursor_survives_refilter_by_identity() {
        let mut controller = loaded_controller();
        // Move to ChannelRow(a, Random).
        for _ in 0..3 {
            controller.handle(PickerInput::ArrowDown);
        }
        assert_eq!(controller.render_state().cursor, Some(2));

        // Filter to "ran": rows become [A, A/Random]; same logical row.
        controller.handle(PickerInput::QueryCommitted("ran".to_string()));
        assert_eq!(controller.render_state().cursor, Some(1));

        // Clear back to full view: row returns to its original index.
        controller.handle(PickerInput::QueryCommitted(String::new()));
        assert_eq!(controller.render_state().cursor, Some(2));
    }

    #[test]
    fn test_no_match_query_forces_idle() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ArrowDown);
        controller.handle(PickerInput::QueryCommitted("zz".to_string()));

        let state = controller.render_state();
        assert!(state.rows.is_empty());
        assert!(state.no_matches());
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn test_escape_clears_query_not_selection() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ArrowDown);
        controller.handle(PickerInput::ArrowDown);
        controller.handle(PickerInput::Commit);
        controller.drain_events();

        controller.handle(PickerInput::QueryCommitted("ran".to_string()));
        controller.handle(PickerInput::Escape);

        let state = controller.render_state();
        assert_eq!(state.query, "");
        assert!(!state.filter.is_active());
        assert_eq!(state.cursor, None);
        assert!(state.selection.is_some());
    }

    #[test]
    fn test_backspace_on_empty_query_clears_selection() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ClickChannel {
            team_id: "a".to_string(),
            channel_id: "a1".to_string(),
        });
        controller.drain_events();

        controller.handle(PickerInput::Backspace);
        let events = controller.drain_events();
        assert_eq!(events, vec![PickerEvent::SelectionChanged(None)]);
        assert!(controller.render_state().selection.is_none());

        // Idempotent: another backspace emits nothing.
        controller.handle(PickerInput::Backspace);
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn test_click_team_toggles_click_channel_selects() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ClickTeam {
            team_id: "b".to_string(),
        });
        assert_eq!(controller.render_state().rows.len(), 5);

        controller.handle(PickerInput::ClickChannel {
            team_id: "b".to_string(),
            channel_id: "b1".to_string(),
        });
        let events = controller.drain_events();
        assert!(matches!(
            &events[..],
            [PickerEvent::SelectionChanged(Some(pair))] if pair.channel.id == "b1"
        ));
    }

    #[test]
    fn test_click_channel_with_stale_ids_is_ignored() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ClickChannel {
            team_id: "ghost".to_string(),
            channel_id: "c9".to_string(),
        });
        assert!(controller.drain_events().is_empty());
        assert!(controller.render_state().selection.is_none());
    }

    #[test]
    fn test_focus_loss_preserves_state() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::QueryCommitted("ran".to_string()));
        controller.handle(PickerInput::ArrowDown);
        let cursor_before = controller.render_state().cursor;

        controller.handle(PickerInput::FocusLost);
        let state = controller.render_state();
        assert!(!state.list_open);
        assert_eq!(state.cursor, cursor_before);
        assert!(state.filter.is_active());

        controller.handle(PickerInput::FocusGained);
        assert!(controller.render_state().list_open);
        assert_eq!(controller.render_state().cursor, cursor_before);
    }

    #[test]
    fn test_reload_resets_everything_and_requests_load() {
        let mut controller = loaded_controller();
        controller.handle(PickerInput::ClickChannel {
            team_id: "a".to_string(),
            channel_id: "a1".to_string(),
        });
        controller.drain_events();

        controller.handle(PickerInput::Reload);
        assert_eq!(
            controller.drain_events(),
            vec![PickerEvent::ReloadRequested]
        );
        assert!(controller.render_state().is_loading);

        // A fresh load wholesale-replaces the tree and clears the selection.
        controller.handle(PickerInput::DirectoryLoaded(sample_teams()));
        let events = controller.drain_events();
        assert_eq!(events, vec![PickerEvent::SelectionChanged(None)]);
        let state = controller.render_state();
        assert!(!state.is_loading);
        assert!(state.selection.is_none());
        assert_eq!(state.cursor, None);
        assert_eq!(state.query, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_debounces_into_one_commit() {
        let (mut controller, mut rx) = PickerController::new();
        controller.handle(PickerInput::DirectoryLoaded(sample_teams()));

        for c in "gen".chars() {
            controller.handle(PickerInput::Char(c));
        }

        // Only the final query survives the quiet period.
        let fed_back = rx.recv().await.unwrap();
        assert_eq!(fed_back, PickerInput::QueryCommitted("gen".to_string()));
        controller.handle(fed_back);

        let state = controller.render_state();
        assert_eq!(state.query, "gen");
        assert_eq!(state.rows.len(), 2);
        assert!(rx.try_recv().is_err());
    }
}
