//! Subcommand implementations.

pub mod position;
pub mod search;
