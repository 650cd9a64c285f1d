//! CLI command implementations.

pub mod config;
pub mod pick;
pub mod validate;
