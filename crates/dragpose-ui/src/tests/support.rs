//! Shared fakes for the widget tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dragpose_foundation::{
    DragSurface, InterceptGuard, ParentBounds, PointerEvent, PointerEventKind,
};
use dragpose_geometry::{Point, Size};

pub struct TestParent {
    size: Cell<Size>,
    pub disallowed: Cell<bool>,
}

impl TestParent {
    pub fn new(width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(Size::new(width, height)),
            disallowed: Cell::new(false),
        })
    }
}

impl ParentBounds for TestParent {
    fn measured_size(&self) -> Size {
        self.size.get()
    }
}

impl InterceptGuard for TestParent {
    fn set_disallow_intercept(&self, disallow: bool) {
        self.disallowed.set(disallow);
    }
}

pub struct TestSurface {
    pub position: Cell<Point>,
    size: Size,
    pub applied: RefCell<Vec<Point>>,
}

impl TestSurface {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            position: Cell::new(Point::new(x, y)),
            size: Size::new(width, height),
            applied: RefCell::new(Vec::new()),
        })
    }
}

impl DragSurface for TestSurface {
    fn position(&self) -> Point {
        self.position.get()
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_position(&self, position: Point) {
        self.position.set(position);
        self.applied.borrow_mut().push(position);
    }
}

pub fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y))
}
