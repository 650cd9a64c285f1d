//! channel-picker: keyboard-driven picker for channels nested under teams.
//!
//! This crate provides a hierarchical team/channel picker with
//! search-as-you-type filtering, debounced query commits, and a
//! single-cursor keyboard navigation model, plus a ratatui front end.
//!
//! # Quick Start
//!
//! ```rust
//! use channel_picker::directory::StaticDirectory;
//! use channel_picker::model::{Channel, Team};
//! use channel_picker::picker::{PickerController, PickerInput};
//!
//! fn main() -> channel_picker::Result<()> {
//!     let directory = StaticDirectory::new(vec![
//!         Team::new("contoso", "Contoso").with_channel(Channel::new("gen", "General")),
//!     ]);
//!
//!     let (mut picker, _feedback) = PickerController::new();
//!     picker.load_from(&directory);
//!
//!     picker.handle(PickerInput::ArrowDown);
//!     picker.handle(PickerInput::Commit); // expand the team
//!     picker.handle(PickerInput::ArrowDown);
//!     picker.handle(PickerInput::Commit); // pick General
//!
//!     for event in picker.drain_events() {
//!         println!("{event:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`model`]: Team and channel data structures and the ordered tree
//! - [`directory`]: Directory providers that load teams with their channels
//! - [`filter`]: Case-insensitive substring filtering and match highlighting
//! - [`nav`]: Row flattening and the navigation cursor
//! - [`selection`]: The single (team, channel) selection
//! - [`debounce`]: Trailing-edge debounce for query commits and reloads
//! - [`picker`]: The controller tying the state machines together
//! - [`tui`]: Terminal front end built on ratatui
//! - [`cli`]: Command-line interface
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod config;
pub mod debounce;
pub mod directory;
pub mod error;
pub mod filter;
pub mod model;
pub mod nav;
pub mod picker;
pub mod selection;
pub mod tui;

// Re-export commonly used types at the crate root
pub use error::{PickerError, Result};
pub use model::{Channel, Team, TeamTree};
pub use selection::{SelectedPair, SelectionModel};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::directory::{DirectoryProvider, JsonFileDirectory, StaticDirectory};
    pub use crate::error::{PickerError, Result};
    pub use crate::model::{Channel, Team, TeamTree};
    pub use crate::picker::{PickerController, PickerEvent, PickerInput};
    pub use crate::selection::SelectedPair;
}
