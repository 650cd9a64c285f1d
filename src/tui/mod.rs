//! Terminal user interface for the picker.
//!
//! This is the host layer from the picker core's point of view: it pumps
//! key events into [`crate::picker::PickerController`] and draws whatever
//! the render-state snapshot says, deriving nothing itself.

pub mod app;
pub mod events;
pub mod theme;

pub use app::run;
pub use theme::Theme;
