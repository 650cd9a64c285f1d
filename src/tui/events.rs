//! TUI event handling.
//!
//! Terminal events are pumped from a background thread into a channel; the
//! main loop consumes them interleaved with debounce feedback. A periodic
//! tick keeps the loop responsive while no key is pressed.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

/// Application events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal tick (keeps the loop draining feedback).
    Tick,
    /// Key press event.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Event handler using channels.
pub struct EventHandler {
    /// Event receiver.
    rx: mpsc::Receiver<Event>,
    /// Sender (kept so the channel stays open).
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if event_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => {
                        if event_tx.send(Event::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            }

            if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one arrives.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Key binding configuration.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Quit keys.
    pub quit: Vec<KeyEvent>,
    /// Navigation up.
    pub up: Vec<KeyEvent>,
    /// Navigation down.
    pub down: Vec<KeyEvent>,
    /// Commit (select channel / toggle team).
    pub commit: Vec<KeyEvent>,
    /// Back/cancel.
    pub back: Vec<KeyEvent>,
    /// Reload the directory.
    pub reload: Vec<KeyEvent>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            ],
            up: vec![KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)],
            down: vec![KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)],
            commit: vec![
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            ],
            back: vec![KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)],
            reload: vec![KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)],
        }
    }
}

impl KeyBindings {
    fn matches(bindings: &[KeyEvent], key: &KeyEvent) -> bool {
        bindings
            .iter()
            .any(|k| k.code == key.code && k.modifiers == key.modifiers)
    }

    /// Check if a key matches the quit binding.
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        Self::matches(&self.quit, key)
    }

    /// Check if a key matches the up binding.
    pub fn is_up(&self, key: &KeyEvent) -> bool {
        Self::matches(&self.up, key)
    }

    /// Check if a key matches the down binding.
    pub fn is_down(&self, key: &KeyEvent) -> bool {
        Self::matches(&self.down, key)
    }

    /// Check if a key matches the commit binding.
    pub fn is_commit(&self, key: &KeyEvent) -> bool {
        Self::matches(&self.commit, key)
    }

    /// Check if a key matches the back binding.
    pub fn is_back(&self, key: &KeyEvent) -> bool {
        Self::matches(&self.back, key)
    }

    /// Check if a key matches the reload binding.
    pub fn is_reload(&self, key: &KeyEvent) -> bool {
        Self::matches(&self.reload, key)
    }
}
