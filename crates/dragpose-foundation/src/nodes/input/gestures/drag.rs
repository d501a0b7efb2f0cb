//! Bounded drag gesture controller.
//!
//! Converts a single-pointer event stream into clamped position updates
//! for one draggable surface, while keeping scrollable ancestors from
//! stealing the gesture.

use std::rc::Rc;

use dragpose_geometry::{clamp_axis, Point, Size};

use crate::gesture_constants::TOUCH_SLOP;

use super::slop::TouchSlopDetector;

/// Measured bounds of the surface containing the draggable widget.
pub trait ParentBounds {
    /// Current measured size. `Size::ZERO` until layout has completed.
    fn measured_size(&self) -> Size;
}

/// Toggle for whether ancestor containers may intercept the ongoing
/// gesture. Disallowed for the duration of a drag so a scrolling
/// ancestor does not hijack the pointer.
pub trait InterceptGuard {
    fn set_disallow_intercept(&self, disallow: bool);
}

/// Geometry of the dragged surface plus the sink its new position is
/// applied through. Hosts implement this with interior mutability.
pub trait DragSurface {
    fn position(&self) -> Point;
    fn size(&self) -> Size;
    fn set_position(&self, position: Point);
}

/// Gesture session phase.
///
/// `Probing` covers the span between pointer-down and the slop
/// decision; `Dragging` means the session has been classified as a
/// drag and the controller claims the event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Probing,
    Dragging,
}

/// When the parent's measured size is (re)queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Measure once and keep the result for the controller's lifetime,
    /// even if the parent is later resized.
    MeasureOnce,
    /// Re-measure at every gesture start.
    PerGesture,
}

#[derive(Clone, Copy, Debug)]
pub struct DragConfig {
    pub slop: f32,
    pub bounds_policy: BoundsPolicy,
    /// When true, position updates wait for the slop classification and
    /// sub-slop moves stay on the tap path. When false every in-bounds
    /// move applies, however small.
    pub confirm_before_move: bool,
}

impl DragConfig {
    /// Preset for a draggable leaf widget: bounds re-measured per
    /// gesture, movement applied from the first move event.
    pub fn view() -> Self {
        Self {
            slop: TOUCH_SLOP,
            bounds_policy: BoundsPolicy::PerGesture,
            confirm_before_move: false,
        }
    }

    /// Preset for a draggable container: bounds measured once, movement
    /// held back until the gesture is classified as a drag.
    pub fn frame() -> Self {
        Self {
            slop: TOUCH_SLOP,
            bounds_policy: BoundsPolicy::MeasureOnce,
            confirm_before_move: true,
        }
    }

    pub fn with_slop(mut self, slop: f32) -> Self {
        self.slop = slop;
        self
    }

    pub fn with_bounds_policy(mut self, policy: BoundsPolicy) -> Self {
        self.bounds_policy = policy;
        self
    }
}

/// Drives one draggable surface through gesture sessions.
///
/// All state is private to the controller and touched only from the
/// host's event-dispatch thread; nothing here is `Send`.
pub struct DragController {
    surface: Rc<dyn DragSurface>,
    parent: Rc<dyn ParentBounds>,
    intercept: Rc<dyn InterceptGuard>,
    detector: TouchSlopDetector,
    bounds_policy: BoundsPolicy,
    confirm_before_move: bool,
    anchor: Point,
    parent_bounds: Size,
    bounds_measured: bool,
    drag_confirmed: bool,
    phase: DragPhase,
}

impl DragController {
    pub fn new(
        surface: Rc<dyn DragSurface>,
        parent: Rc<dyn ParentBounds>,
        intercept: Rc<dyn InterceptGuard>,
        config: DragConfig,
    ) -> Self {
        Self {
            surface,
            parent,
            intercept,
            detector: TouchSlopDetector::new(config.slop),
            bounds_policy: config.bounds_policy,
            confirm_before_move: config.confirm_before_move,
            anchor: Point::ZERO,
            parent_bounds: Size::ZERO,
            bounds_measured: false,
            drag_confirmed: false,
            phase: DragPhase::Idle,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_drag_confirmed(&self) -> bool {
        self.drag_confirmed
    }

    pub fn parent_bounds(&self) -> Size {
        self.parent_bounds
    }

    /// Pointer-down: anchors the session, measures parent bounds per
    /// the configured policy and keeps ancestors from intercepting for
    /// the duration of the gesture.
    pub fn on_gesture_start(&mut self, position: Point) {
        self.intercept.set_disallow_intercept(true);
        self.anchor = position;
        self.drag_confirmed = false;
        self.phase = DragPhase::Probing;
        if self.bounds_policy == BoundsPolicy::PerGesture || !self.bounds_measured {
            self.measure_parent();
        }
    }

    /// Pointer-move: classifies the gesture against the slop and, once
    /// the session has valid bounds, applies the clamped target through
    /// the surface sink.
    ///
    /// Returns true when the gesture is classified as a drag; the
    /// container adapter uses this as its interception claim.
    pub fn on_gesture_move(&mut self, position: Point) -> bool {
        self.intercept.set_disallow_intercept(true);
        let delta = position - self.anchor;
        if !self.drag_confirmed && self.detector.exceeds(delta) {
            self.drag_confirmed = true;
            self.phase = DragPhase::Dragging;
            log::debug!("drag claimed at delta ({}, {})", delta.x, delta.y);
        }
        if self.confirm_before_move && !self.drag_confirmed {
            return false;
        }
        if let Some(target) = self.drag_target(delta) {
            self.surface.set_position(target);
            log::trace!("drag target ({}, {})", target.x, target.y);
        }
        self.drag_confirmed
    }

    /// Pointer-up or cancel: releases the session and lets ancestors
    /// intercept again. No position math happens on this phase.
    pub fn on_gesture_end(&mut self, _position: Point) {
        self.intercept.set_disallow_intercept(false);
        self.drag_confirmed = false;
        self.phase = DragPhase::Idle;
    }

    fn measure_parent(&mut self) {
        let measured = self.parent.measured_size();
        if measured.is_empty() {
            log::warn!(
                "gesture started before parent layout; keeping bounds {:?}",
                self.parent_bounds
            );
            return;
        }
        self.parent_bounds = measured;
        self.bounds_measured = true;
    }

    /// Clamped target for the current delta, or None while bounds are
    /// unavailable or the anchor fell outside them.
    fn drag_target(&self, delta: Point) -> Option<Point> {
        let bounds = self.parent_bounds;
        if bounds.is_empty() {
            return None;
        }
        // Anchor gate: x is bounded on both sides, y only from above.
        if self.anchor.x < 0.0 || self.anchor.x > bounds.width || self.anchor.y > bounds.height {
            return None;
        }
        let own = self.surface.position();
        let size = self.surface.size();
        Some(Point::new(
            clamp_axis(own.x + delta.x, bounds.width - size.width),
            clamp_axis(own.y + delta.y, bounds.height - size.height),
        ))
    }
}
