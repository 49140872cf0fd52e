//! Floating element positioning for Sveltacular.
//!
//! This crate provides:
//! - Placement parsing (`"bottom-start"`, `"left"`, ...)
//! - Viewport collision detection with auto-flip and auto-align fallbacks
//! - Arrow placement pointing back at the reference element
//! - An event-driven updater for hosts that re-layout on scroll/resize
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use sveltacular_position::{calculate_position, PositionOptions, Rect, Side};
//!
//! let reference = Rect::new(100.0, 680.0, 80.0, 30.0);
//! let floating = Rect::new(0.0, 0.0, 120.0, 60.0);
//! let viewport = Rect::viewport(1280.0, 720.0);
//!
//! let options = PositionOptions::new("bottom".parse().unwrap());
//! let position = calculate_position(&reference, &floating, &viewport, &options);
//! assert_eq!(position.side, Side::Top); // no room below, flipped
//! ```

mod arrow;
mod engine;
mod error;
mod options;
mod placement;
mod rect;
pub mod updater;

#[cfg(feature = "wasm")]
mod wasm;

pub use arrow::{calculate_arrow_position, ArrowPosition};
pub use engine::{calculate_position, fits_in_viewport, Position};
pub use error::{PositionError, PositionErrorCode, Result};
pub use options::{PositionOptions, DEFAULT_ARROW_SIZE, DEFAULT_OFFSET, DEFAULT_VIEWPORT_PADDING};
pub use placement::{get_opposite_side, parse_placement, Alignment, Placement, Side};
pub use rect::Rect;
pub use updater::{LayoutEvent, LayoutSource, PositionUpdate, PositionUpdater};
