//! Positioning options.

use crate::placement::Placement;
use serde::{Deserialize, Serialize};

/// Default gap between reference and floating element, in pixels.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Default minimum distance from the viewport edge, in pixels.
pub const DEFAULT_VIEWPORT_PADDING: f64 = 8.0;

/// Default arrow size, in pixels.
pub const DEFAULT_ARROW_SIZE: f64 = 8.0;

/// Options for a single positioning call.
///
/// Field names are camelCase on the wire so JSON hosts can pass the same
/// option objects they use on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOptions {
    /// Preferred placement
    pub placement: Placement,
    /// Gap between reference and floating element
    #[serde(default = "default_offset")]
    pub offset: f64,
    /// Try the opposite side when the preferred side overflows
    #[serde(default = "default_true")]
    pub auto_flip: bool,
    /// Try other alignments when flipping doesn't help
    #[serde(default = "default_true")]
    pub auto_align: bool,
    /// Minimum distance from the viewport edge
    #[serde(default = "default_viewport_padding")]
    pub viewport_padding: f64,
    /// Compute an arrow position as well
    #[serde(default)]
    pub arrow: bool,
    /// Arrow size
    #[serde(default = "default_arrow_size")]
    pub arrow_size: f64,
}

fn default_offset() -> f64 {
    DEFAULT_OFFSET
}

fn default_viewport_padding() -> f64 {
    DEFAULT_VIEWPORT_PADDING
}

fn default_arrow_size() -> f64 {
    DEFAULT_ARROW_SIZE
}

fn default_true() -> bool {
    true
}

impl PositionOptions {
    /// Creates options for `placement` with every other field at its default.
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            offset: DEFAULT_OFFSET,
            auto_flip: true,
            auto_align: true,
            viewport_padding: DEFAULT_VIEWPORT_PADDING,
            arrow: false,
            arrow_size: DEFAULT_ARROW_SIZE,
        }
    }

    /// Sets the gap between reference and floating element.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Enables or disables auto-flip.
    pub fn with_auto_flip(mut self, enabled: bool) -> Self {
        self.auto_flip = enabled;
        self
    }

    /// Enables or disables auto-align.
    pub fn with_auto_align(mut self, enabled: bool) -> Self {
        self.auto_align = enabled;
        self
    }

    /// Sets the viewport padding.
    pub fn with_viewport_padding(mut self, padding: f64) -> Self {
        self.viewport_padding = padding;
        self
    }

    /// Enables arrow computation with the given size.
    pub fn with_arrow(mut self, size: f64) -> Self {
        self.arrow = true;
        self.arrow_size = size;
        self
    }
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self::new(Placement::default())
    }
}
