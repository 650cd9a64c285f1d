//! Keyboard navigation over the visible tree.
//!
//! The tree is flattened into an ordered sequence of [`NavigableRow`]s that
//! respects both the stored expand flags and any active filter. That
//! sequence is the only coordinate space for cursor movement; indices into
//! the raw team/channel collections are never reused as cursor positions,
//! because hidden rows are excluded from the sequence.

pub mod cursor;
pub mod rows;

pub use cursor::Cursor;
pub use rows::{flatten, NavigableRow};
