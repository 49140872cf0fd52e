//! Collision-aware placement of a floating element next to a reference element.
//!
//! The engine is a pure function of its inputs. Resolution order:
//! preferred placement, opposite side (auto-flip), other alignments on the
//! preferred side (auto-align), and finally clamping into the padded viewport.

use crate::options::PositionOptions;
use crate::placement::{Alignment, Placement, Side};
use crate::rect::Rect;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Resolved position of the floating element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Top coordinate in viewport pixels
    pub top: f64,
    /// Left coordinate in viewport pixels
    pub left: f64,
    /// Side after fallback
    pub side: Side,
    /// Alignment after fallback
    pub alignment: Alignment,
}

impl Position {
    /// The resolved placement.
    #[inline]
    pub fn placement(&self) -> Placement {
        Placement::new(self.side, self.alignment)
    }
}

/// Calculates where to put `floating` next to `reference` inside `viewport`.
///
/// Only the size of `floating` is used; its current origin is ignored.
///
/// # Example
/// ```
/// use sveltacular_position::{calculate_position, Alignment, PositionOptions, Rect, Side};
///
/// let reference = Rect::new(500.0, 300.0, 100.0, 40.0);
/// let floating = Rect::new(0.0, 0.0, 200.0, 100.0);
/// let viewport = Rect::viewport(1280.0, 720.0);
///
/// let pos = calculate_position(&reference, &floating, &viewport, &PositionOptions::default());
/// assert_eq!((pos.side, pos.alignment), (Side::Bottom, Alignment::Center));
/// assert_eq!((pos.top, pos.left), (348.0, 450.0));
/// ```
pub fn calculate_position(
    reference: &Rect,
    floating: &Rect,
    viewport: &Rect,
    options: &PositionOptions,
) -> Position {
    let padding = options.viewport_padding;
    let Placement { mut side, mut alignment } = options.placement;

    let (mut top, mut left) = coords_for(reference, floating, side, alignment, options.offset);
    let mut fits = fits_in_viewport(top, left, floating, viewport, padding);

    if !fits && options.auto_flip {
        let flipped = side.opposite();
        let (t, l) = coords_for(reference, floating, flipped, alignment, options.offset);
        if fits_in_viewport(t, l, floating, viewport, padding) {
            trace!(from = %side, to = %flipped, "flipped placement");
            (top, left, side) = (t, l, flipped);
            fits = true;
        }
    }

    if !fits && options.auto_align {
        for candidate in Alignment::ALL.into_iter().filter(|a| *a != alignment) {
            let (t, l) = coords_for(reference, floating, side, candidate, options.offset);
            if fits_in_viewport(t, l, floating, viewport, padding) {
                trace!(%side, from = %alignment, to = %candidate, "realigned placement");
                (top, left, alignment) = (t, l, candidate);
                fits = true;
                break;
            }
        }
    }

    if !fits {
        trace!(%side, %alignment, "no placement fits, clamping to viewport");
        let bounds = viewport.inset(padding);
        left = clamp_lower_wins(left, bounds.left, bounds.right - floating.width);
        top = clamp_lower_wins(top, bounds.top, bounds.bottom - floating.height);
    }

    Position { top, left, side, alignment }
}

/// Returns true if a floating element at `(top, left)` stays inside the
/// viewport inset by `padding` on every side.
pub fn fits_in_viewport(top: f64, left: f64, floating: &Rect, viewport: &Rect, padding: f64) -> bool {
    viewport.inset(padding).contains(&floating.moved_to(left, top))
}

/// Candidate `(top, left)` for a side and alignment.
fn coords_for(reference: &Rect, floating: &Rect, side: Side, alignment: Alignment, offset: f64) -> (f64, f64) {
    match side {
        Side::Top => (
            reference.top - floating.height - offset,
            align(reference.left, reference.width, floating.width, alignment),
        ),
        Side::Bottom => (
            reference.bottom + offset,
            align(reference.left, reference.width, floating.width, alignment),
        ),
        Side::Left => (
            align(reference.top, reference.height, floating.height, alignment),
            reference.left - floating.width - offset,
        ),
        Side::Right => (
            align(reference.top, reference.height, floating.height, alignment),
            reference.right + offset,
        ),
    }
}

/// Cross-axis coordinate for an alignment along one axis.
#[inline]
fn align(reference_start: f64, reference_size: f64, floating_size: f64, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Start => reference_start,
        Alignment::Center => reference_start + reference_size / 2.0 - floating_size / 2.0,
        Alignment::End => reference_start + reference_size - floating_size,
    }
}

/// `max(lo, min(value, hi))`. Unlike `f64::clamp` this accepts `lo > hi`
/// and resolves to `lo`.
#[inline]
fn clamp_lower_wins(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
