//! Configuration loading and schema definitions
//!
//! TOML defaults for positioning and search, shared by every host.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
