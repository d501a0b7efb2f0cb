//! Event-handling contract between a host and a draggable widget.

use super::types::PointerEvent;

/// A node that receives routed pointer events.
///
/// Containers get a two-step dispatch: the host first probes
/// [`on_intercept_pointer_event`](PointerInputTarget::on_intercept_pointer_event),
/// and once a target returns true there, subsequent events of the
/// gesture are routed to
/// [`on_pointer_event`](PointerInputTarget::on_pointer_event)
/// exclusively. Leaf widgets only ever see `on_pointer_event`.
pub trait PointerInputTarget {
    /// Handles an event routed to this target. Returns true when the
    /// event was handled.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool;

    /// Probes whether this target wants to take over the event stream
    /// from its children. Defaults to never intercepting.
    fn on_intercept_pointer_event(&mut self, _event: &PointerEvent) -> bool {
        false
    }

    /// Whether the point (in parent coordinates) lies inside the
    /// target's current frame.
    fn hit_test(&self, x: f32, y: f32) -> bool;
}
