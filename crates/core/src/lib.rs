//! Core utilities for Sveltacular hosts
//!
//! This crate ties the positioning and search engines to the outside world:
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: TOML defaults for positioning and search options
//!
//! # Example
//!
//! ```rust,no_run
//! use sveltacular_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! let options = config.schema.position.to_options().expect("invalid placement");
//! println!("default placement: {}", options.placement);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
