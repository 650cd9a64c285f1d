//! Data model for the team/channel tree.
//!
//! This module provides the in-memory representation of the directory
//! hierarchy the picker operates on: an ordered collection of [`Team`] nodes,
//! each owning an ordered list of [`Channel`] nodes plus an expand/collapse
//! flag that only navigation logic mutates.

pub mod team;
pub mod tree;

pub use team::*;
pub use tree::*;
