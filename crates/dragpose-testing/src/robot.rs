//! Robot harness for end-to-end drag testing.
//!
//! Drives a widget through synthetic pointer streams the way a host
//! would: events are produced in parent coordinates, converted to the
//! widget's local space against its current origin, queued through the
//! pointer dispatcher, and routed through the interception probe before
//! regular handling.
//!
//! # Example
//!
//! ```
//! use dragpose_testing::{DragRobot, FakeParent, FakeSurface};
//! use dragpose_ui::DraggableView;
//!
//! let parent = FakeParent::new(400.0, 800.0);
//! let surface = FakeSurface::new(0.0, 0.0, 100.0, 100.0);
//! let view = DraggableView::new(surface.clone(), parent.clone(), parent.clone());
//!
//! let mut robot = DragRobot::new(view, surface.clone(), parent.clone());
//! robot.drag(10.0, 10.0, 60.0, 10.0);
//! assert_eq!(surface.origin().x, 50.0);
//! ```

use std::rc::Rc;

use dragpose_foundation::{
    PointerDispatcher, PointerEvent, PointerEventKind, PointerInputTarget,
};
use dragpose_geometry::Point;

use crate::fakes::{FakeParent, FakeSurface};

/// Programmatic pointer control over one widget under test.
pub struct DragRobot<T: PointerInputTarget> {
    target: T,
    surface: Rc<FakeSurface>,
    parent: Rc<FakeParent>,
    dispatcher: PointerDispatcher,
    intercepted: bool,
}

impl<T: PointerInputTarget> DragRobot<T> {
    pub fn new(target: T, surface: Rc<FakeSurface>, parent: Rc<FakeParent>) -> Self {
        Self {
            target,
            surface,
            parent,
            dispatcher: PointerDispatcher::new(),
            intercepted: false,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn surface_origin(&self) -> Point {
        self.surface.origin()
    }

    pub fn parent(&self) -> &Rc<FakeParent> {
        &self.parent
    }

    /// Whether the target has claimed the current gesture through its
    /// interception probe.
    pub fn is_drag_claimed(&self) -> bool {
        self.intercepted
    }

    /// Press at the given parent coordinates.
    pub fn press_at(&mut self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Down, x, y);
    }

    /// Move the pointer to the given parent coordinates.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Move, x, y);
    }

    /// Release at the given parent coordinates.
    pub fn release_at(&mut self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Up, x, y);
    }

    /// Cancel the gesture at the given parent coordinates.
    pub fn cancel_at(&mut self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Cancel, x, y);
    }

    /// Perform a drag from one point to another, moving in steps to
    /// simulate a smooth pointer path.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press_at(from_x, from_y);
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            self.move_to(x, y);
        }
        self.release_at(to_x, to_y);
    }

    fn dispatch(&mut self, kind: PointerEventKind, x: f32, y: f32) {
        let origin = self.surface.origin();
        let local = Point::new(x - origin.x, y - origin.y);
        self.dispatcher.push(PointerEvent::new(kind, local));
        let mut queued = std::mem::take(&mut self.dispatcher);
        queued.drain(|_, event| self.route(&event));
    }

    fn route(&mut self, event: &PointerEvent) {
        if self.intercepted {
            self.target.on_pointer_event(event);
        } else if self.target.on_intercept_pointer_event(event) {
            // The claiming event is swallowed by the probe; a child
            // would see it replaced by a cancel.
            self.intercepted = true;
        } else {
            // No interception: the widget is itself the touch target.
            // Containers without an interested child see events on both
            // surfaces, as hosts deliver them.
            self.target.on_pointer_event(event);
        }
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.intercepted = false;
        }
    }
}
