//! Axis-aligned rectangles in viewport pixel coordinates.

use serde::{Deserialize, Serialize};

/// An axis-aligned box, as read from an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RectInput")]
pub struct Rect {
    /// Distance from the viewport top to the top edge
    pub top: f64,
    /// Distance from the viewport left to the left edge
    pub left: f64,
    /// Distance from the viewport left to the right edge
    pub right: f64,
    /// Distance from the viewport top to the bottom edge
    pub bottom: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Rect {
    /// Creates a rect from its origin and size.
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Creates a viewport rect anchored at the origin.
    #[inline]
    pub fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Horizontal midpoint.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Returns this rect shrunk by `padding` on every side.
    ///
    /// Width and height may go negative when the padding exceeds half the size.
    pub fn inset(&self, padding: f64) -> Self {
        Self {
            top: self.top + padding,
            left: self.left + padding,
            right: self.right - padding,
            bottom: self.bottom - padding,
            width: self.width - padding * 2.0,
            height: self.height - padding * 2.0,
        }
    }

    /// Returns true if `other` lies entirely inside this rect (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.top >= self.top
            && other.left >= self.left
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns the same size moved to a new origin.
    #[inline]
    pub fn moved_to(&self, left: f64, top: f64) -> Self {
        Self::new(left, top, self.width, self.height)
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((left, top, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(left, top, width, height)
    }
}

/// Wire form accepted from hosts: `right`/`bottom` may be omitted.
#[derive(Deserialize)]
struct RectInput {
    #[serde(default)]
    top: f64,
    #[serde(default)]
    left: f64,
    right: Option<f64>,
    bottom: Option<f64>,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

impl From<RectInput> for Rect {
    fn from(input: RectInput) -> Self {
        Self {
            top: input.top,
            left: input.left,
            right: input.right.unwrap_or(input.left + input.width),
            bottom: input.bottom.unwrap_or(input.top + input.height),
            width: input.width,
            height: input.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right, 110.0);
        assert_eq!(rect.bottom, 70.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 45.0);
    }

    #[test]
    fn test_inset() {
        let vp = Rect::viewport(100.0, 80.0).inset(8.0);
        assert_eq!(vp.left, 8.0);
        assert_eq!(vp.right, 92.0);
        assert_eq!(vp.bottom, 72.0);
        assert_eq!(vp.height, 64.0);
    }

    #[test]
    fn test_contains() {
        let outer = Rect::viewport(100.0, 100.0);
        assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(!outer.contains(&Rect::new(50.0, 50.0, 60.0, 10.0)));
    }

    #[test]
    fn test_deserialize_partial() {
        let rect: Rect = serde_json::from_str(r#"{"left": 5, "top": 10, "width": 20, "height": 30}"#).unwrap();
        assert_eq!(rect, Rect::new(5.0, 10.0, 20.0, 30.0));
    }

    #[test]
    fn test_deserialize_dom_rect() {
        let json = r#"{"x": 1, "y": 2, "top": 2, "left": 1, "right": 11, "bottom": 7, "width": 10, "height": 5}"#;
        let rect: Rect = serde_json::from_str(json).unwrap();
        assert_eq!(rect.right, 11.0);
        assert_eq!(rect.bottom, 7.0);
    }
}
