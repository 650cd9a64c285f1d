//! TUI application main loop.
//!
//! Renders the controller's [`RenderState`] snapshot and feeds key events
//! back into it. The renderer re-derives nothing: rows, cursor, filter,
//! selection, and loading state all come from the snapshot.

use std::io;
use std::time::Duration;

use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::directory::DirectoryProvider;
use crate::error::{PickerError, Result};
use crate::nav::NavigableRow;
use crate::picker::{PickerController, PickerEvent, PickerInput, RenderState};
use crate::selection::SelectedPair;

use super::events::{Event, EventHandler, KeyBindings};
use super::theme::Theme;

/// Run the interactive picker and return the chosen pair, if any.
///
/// Returns `Ok(None)` when the user quits without choosing.
pub fn run(
    provider: &dyn DirectoryProvider,
    config: &Config,
) -> Result<Option<SelectedPair>> {
    enable_raw_mode().map_err(|e| {
        PickerError::io(
            "Cannot launch TUI - no interactive terminal available",
            e,
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PickerError::io("Failed to enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| PickerError::io("Failed to create terminal", e))?;

    // The debounce timer needs a runtime; the loop itself stays synchronous.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .map_err(|e| PickerError::io("Failed to start async runtime", e))?;
    let _guard = runtime.enter();

    let theme = Theme::from_name(&config.theme.name).unwrap_or_default();
    let result = run_loop(&mut terminal, provider, config, &theme);

    disable_raw_mode().map_err(|e| PickerError::io("Failed to disable raw mode", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| PickerError::io("Failed to leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| PickerError::io("Failed to show cursor", e))?;

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    provider: &dyn DirectoryProvider,
    config: &Config,
    theme: &Theme,
) -> Result<Option<SelectedPair>> {
    let (mut controller, mut feedback_rx) =
        PickerController::with_quiet_period(config.debounce.search_period());
    controller.load_from(provider);

    let events = EventHandler::new(Duration::from_millis(50));
    let bindings = KeyBindings::default();

    // Mashing Ctrl-R collapses into one reload after its own quiet period.
    let mut reload_debounce = Debouncer::new(config.debounce.reload_period());

    loop {
        // Debounced query commits arrive through the feedback channel.
        while let Ok(input) = feedback_rx.try_recv() {
            controller.handle(input);
        }

        for event in controller.drain_events() {
            match event {
                PickerEvent::SelectionChanged(Some(pair)) => return Ok(Some(pair)),
                PickerEvent::SelectionChanged(None) => {}
                PickerEvent::ReloadRequested => controller.load_from(provider),
            }
        }

        terminal
            .draw(|f| draw_ui(f, &controller.render_state(), config, theme))
            .map_err(|e| PickerError::io("Failed to draw TUI", e))?;

        match events.next() {
            Ok(Event::Key(key)) => {
                if bindings.is_quit(&key) {
                    return Ok(None);
                }
                if bindings.is_up(&key) {
                    controller.handle(PickerInput::ArrowUp);
                } else if bindings.is_down(&key) {
                    controller.handle(PickerInput::ArrowDown);
                } else if bindings.is_commit(&key) {
                    controller.handle(PickerInput::Commit);
                } else if bindings.is_back(&key) {
                    // Esc with an empty query quits; otherwise it clears the
                    // in-progress query.
                    if controller.render_state().query.is_empty() {
                        return Ok(None);
                    }
                    controller.handle(PickerInput::Escape);
                } else if bindings.is_reload(&key) {
                    let tx = controller.feedback_sender();
                    reload_debounce.schedule(move || {
                        let _ = tx.send(PickerInput::Reload);
                    });
                } else {
                    match key.code {
                        KeyCode::Char(c) => controller.handle(PickerInput::Char(c)),
                        KeyCode::Backspace => controller.handle(PickerInput::Backspace),
                        _ => {}
                    }
                }
            }
            Ok(Event::Tick | Event::Resize(_, _)) => {}
            Err(_) => return Ok(None),
        }
    }
}

/// Draw the picker: input line, row list, status bar.
fn draw_ui(f: &mut Frame, state: &RenderState<'_>, config: &Config, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_input(f, chunks[0], state, config, theme);
    draw_rows(f, chunks[1], state, config, theme);
    draw_status(f, chunks[2], state, theme);
}

/// The search input, or the compact chosen view once a selection exists.
fn draw_input(f: &mut Frame, area: Rect, state: &RenderState<'_>, config: &Config, theme: &Theme) {
    let arrow = if config.theme.unicode { " ▸ " } else { " > " };

    let content = if let Some(pair) = state.selection {
        Line::from(vec![
            Span::styled(
                pair.team.display_name.clone(),
                Style::default().fg(theme.selection),
            ),
            Span::styled(arrow.to_string(), Style::default().fg(theme.muted)),
            Span::styled(
                pair.channel.display_name.clone(),
                Style::default().fg(theme.selection),
            ),
            Span::styled("  (backspace to clear)", Style::default().fg(theme.muted)),
        ])
    } else if state.query.is_empty() {
        Line::from(Span::styled(
            config.display.placeholder.clone(),
            Style::default().fg(theme.muted),
        ))
    } else {
        Line::from(Span::styled(
            state.query.to_string(),
            Style::default().fg(theme.foreground),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title("Channel");
    f.render_widget(Paragraph::new(content).block(block), area);
}

/// The flattened row list, or a loading/error/no-matches message.
fn draw_rows(f: &mut Frame, area: Rect, state: &RenderState<'_>, config: &Config, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if state.is_loading {
        let msg = Paragraph::new(Span::styled(
            config.display.loading_text.clone(),
            Style::default().fg(theme.muted),
        ))
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    if let Some(error) = state.error {
        let msg = Paragraph::new(Span::styled(
            error.to_string(),
            Style::default().fg(theme.error),
        ))
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    if state.no_matches() {
        let msg = Paragraph::new(Span::styled(
            config.display.no_matches_text.clone(),
            Style::default().fg(theme.muted),
        ))
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    if !state.list_open {
        f.render_widget(block, area);
        return;
    }

    // Keep the cursor row inside the viewport.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = match state.cursor {
        Some(p) if visible > 0 && p >= visible => p + 1 - visible,
        _ => 0,
    };

    let items: Vec<ListItem> = state
        .rows
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible.max(1))
        .map(|(i, row)| {
            let mut line = row_line(row, state, config, theme);
            if state.cursor == Some(i) {
                line = line.style(theme.cursor_style());
            }
            ListItem::new(line)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Build the display line for one navigable row.
fn row_line(
    row: &NavigableRow,
    state: &RenderState<'_>,
    config: &Config,
    theme: &Theme,
) -> Line<'static> {
    match row {
        NavigableRow::Team { team_id } => {
            let Some(team) = state.tree.team(team_id) else {
                return Line::from("?");
            };
            let open = state.filter.team_display_expanded(team);
            let marker = match (config.theme.unicode, open) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, true) => "v ",
                (false, false) => "> ",
            };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(theme.muted)),
                Span::styled(
                    team.display_name.clone(),
                    Style::default().fg(theme.primary),
                ),
            ])
        }
        NavigableRow::Channel {
            team_id,
            channel_id,
        } => {
            let Some(channel) = state.tree.channel(team_id, channel_id) else {
                return Line::from("?");
            };
            let mut spans = vec![Span::raw("    ")];
            match state.highlight_for(channel) {
                Some(h) => {
                    spans.push(Span::styled(h.prefix, Style::default().fg(theme.foreground)));
                    spans.push(Span::styled(h.matched, theme.highlight_style()));
                    spans.push(Span::styled(h.suffix, Style::default().fg(theme.foreground)));
                }
                None => spans.push(Span::styled(
                    channel.display_name.clone(),
                    Style::default().fg(theme.foreground),
                )),
            }
            Line::from(spans)
        }
    }
}

/// One-line key hints.
fn draw_status(f: &mut Frame, area: Rect, state: &RenderState<'_>, theme: &Theme) {
    let hints = if state.selection.is_some() {
        "backspace clear · ctrl-c quit"
    } else {
        "type to search · ↑/↓ navigate · enter select · esc quit · ctrl-r reload"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.muted))),
        area,
    );
}
