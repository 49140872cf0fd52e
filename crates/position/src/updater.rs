//! Event-driven re-positioning.
//!
//! Hosts own the element geometry and the event loop. They implement
//! [`LayoutSource`], build a [`PositionUpdater`], and forward scroll and
//! resize events to it. Every update re-reads geometry and recomputes from
//! scratch; there is no debouncing or batching.

use crate::arrow::{calculate_arrow_position, ArrowPosition};
use crate::engine::{calculate_position, Position};
use crate::options::PositionOptions;
use crate::rect::Rect;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Live geometry supplied by the host.
pub trait LayoutSource {
    /// Bounding box of the reference element.
    fn reference_rect(&self) -> Rect;

    /// Bounding box of the floating element. Only its size is used.
    fn floating_rect(&self) -> Rect;

    /// Visible viewport, usually `Rect::viewport(inner_width, inner_height)`.
    fn viewport_rect(&self) -> Rect;
}

/// Layout-changing events the updater listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEvent {
    /// Any ancestor scrolled
    Scroll,
    /// The window was resized
    Resize,
}

/// Output of one update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    /// Where the floating element goes
    pub position: Position,
    /// Arrow offset, when arrows are enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow: Option<ArrowPosition>,
}

/// Recomputes a floating element's position whenever the layout changes.
pub struct PositionUpdater<S, F>
where
    S: LayoutSource,
    F: FnMut(PositionUpdate),
{
    source: S,
    options: PositionOptions,
    on_update: F,
    attached: bool,
}

impl<S, F> PositionUpdater<S, F>
where
    S: LayoutSource,
    F: FnMut(PositionUpdate),
{
    /// Creates an attached updater and runs the initial update.
    pub fn new(source: S, options: PositionOptions, on_update: F) -> Self {
        let mut updater = Self {
            source,
            options,
            on_update,
            attached: true,
        };
        updater.update();
        updater
    }

    /// Recomputes from the current geometry and notifies the callback.
    pub fn update(&mut self) -> PositionUpdate {
        let reference = self.source.reference_rect();
        let floating = self.source.floating_rect();
        let viewport = self.source.viewport_rect();

        let position = calculate_position(&reference, &floating, &viewport, &self.options);
        let arrow = self.options.arrow.then(|| {
            let placed = floating.moved_to(position.left, position.top);
            calculate_arrow_position(&reference, &placed, position.side, self.options.arrow_size)
        });

        let update = PositionUpdate { position, arrow };
        (self.on_update)(update);
        update
    }

    /// Handles a layout event. Returns false if the updater is detached.
    pub fn handle_event(&mut self, event: LayoutEvent) -> bool {
        if !self.attached {
            debug!(?event, "ignoring layout event on detached updater");
            return false;
        }
        debug!(?event, "repositioning");
        self.update();
        true
    }

    /// Stops listening for layout events.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Whether layout events still trigger updates.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mutable access to the geometry source, e.g. to simulate layout changes.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, Side};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StaticLayout {
        reference: Rect,
        floating: Rect,
        viewport: Rect,
    }

    impl LayoutSource for StaticLayout {
        fn reference_rect(&self) -> Rect {
            self.reference
        }
        fn floating_rect(&self) -> Rect {
            self.floating
        }
        fn viewport_rect(&self) -> Rect {
            self.viewport
        }
    }

    fn layout() -> StaticLayout {
        StaticLayout {
            reference: Rect::new(500.0, 300.0, 100.0, 40.0),
            floating: Rect::new(0.0, 0.0, 200.0, 100.0),
            viewport: Rect::viewport(1280.0, 720.0),
        }
    }

    #[test]
    fn test_initial_update_runs_on_creation() {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        let _updater = PositionUpdater::new(layout(), PositionOptions::default(), move |u| sink.borrow_mut().push(u));

        let updates = updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].position.side, Side::Bottom);
        assert_eq!(updates[0].position.alignment, Alignment::Center);
        assert!(updates[0].arrow.is_none());
    }

    #[test]
    fn test_events_recompute_from_fresh_geometry() {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        let mut updater = PositionUpdater::new(layout(), PositionOptions::default(), move |u| sink.borrow_mut().push(u));

        // Scrolled so the reference sits at the bottom edge.
        updater.source_mut().reference = Rect::new(500.0, 680.0, 100.0, 30.0);
        assert!(updater.handle_event(LayoutEvent::Scroll));

        let updates = updates.borrow();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].position.side, Side::Top);
    }

    #[test]
    fn test_detach_ignores_events() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut updater = PositionUpdater::new(layout(), PositionOptions::default(), move |_| *sink.borrow_mut() += 1);

        updater.detach();
        assert!(!updater.is_attached());
        assert!(!updater.handle_event(LayoutEvent::Resize));
        assert!(!updater.handle_event(LayoutEvent::Scroll));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_arrow_uses_new_position() {
        let options = PositionOptions::default().with_arrow(8.0);
        let mut updater = PositionUpdater::new(layout(), options, |_| {});
        let update = updater.update();

        let arrow = update.arrow.unwrap();
        assert_eq!(arrow.side, Side::Top);
        // Floating placed at left 450; reference center at 550.
        assert_eq!(arrow.left, Some(96.0));
    }
}
