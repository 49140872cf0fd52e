//! Arrow placement for floating elements.

use crate::placement::Side;
use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// Offset of the arrow inside the floating element.
///
/// Exactly one of `top`/`left` is set: `left` when the floating element sits
/// above or below the reference, `top` when it sits beside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowPosition {
    /// Offset from the floating element's top edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Offset from the floating element's left edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Edge of the floating element the arrow is drawn on
    pub side: Side,
}

/// Calculates where the arrow goes so that it points at the reference center.
///
/// `side` is the side the floating element sits on; the arrow is drawn on
/// the opposite edge of the floating element. The offset is kept at least
/// `arrow_size` away from the floating element's corners.
///
/// # Example
/// ```
/// use sveltacular_position::{calculate_arrow_position, Rect, Side};
///
/// let reference = Rect::new(500.0, 300.0, 100.0, 40.0);
/// let floating = Rect::new(450.0, 348.0, 200.0, 100.0);
///
/// let arrow = calculate_arrow_position(&reference, &floating, Side::Bottom, 8.0);
/// assert_eq!(arrow.side, Side::Top);
/// assert_eq!(arrow.left, Some(96.0));
/// ```
pub fn calculate_arrow_position(reference: &Rect, floating: &Rect, side: Side, arrow_size: f64) -> ArrowPosition {
    let arrow_side = side.opposite();

    if side.is_vertical() {
        let offset = reference.center_x() - floating.left - arrow_size / 2.0;
        ArrowPosition {
            top: None,
            left: Some(keep_off_corners(offset, floating.width, arrow_size)),
            side: arrow_side,
        }
    } else {
        let offset = reference.center_y() - floating.top - arrow_size / 2.0;
        ArrowPosition {
            top: Some(keep_off_corners(offset, floating.height, arrow_size)),
            left: None,
            side: arrow_side,
        }
    }
}

// Lower bound wins when the floating element is too small for both.
#[inline]
fn keep_off_corners(offset: f64, extent: f64, arrow_size: f64) -> f64 {
    offset.min(extent - arrow_size * 2.0).max(arrow_size)
}
