//! In-memory host fakes for driving drag widgets in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dragpose_foundation::{DragSurface, InterceptGuard, ParentBounds};
use dragpose_geometry::{Point, Size};

/// Fake containing surface: a resizable measured size plus a record of
/// the interception toggles the widget under test requests.
pub struct FakeParent {
    size: Cell<Size>,
    disallowed: Cell<bool>,
    toggles: RefCell<Vec<bool>>,
}

impl FakeParent {
    pub fn new(width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(Size::new(width, height)),
            disallowed: Cell::new(false),
            toggles: RefCell::new(Vec::new()),
        })
    }

    /// Parent that has not been laid out yet.
    pub fn unmeasured() -> Rc<Self> {
        Self::new(0.0, 0.0)
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.size.set(Size::new(width, height));
    }

    pub fn is_intercept_disallowed(&self) -> bool {
        self.disallowed.get()
    }

    pub fn intercept_toggles(&self) -> Vec<bool> {
        self.toggles.borrow().clone()
    }
}

impl ParentBounds for FakeParent {
    fn measured_size(&self) -> Size {
        self.size.get()
    }
}

impl InterceptGuard for FakeParent {
    fn set_disallow_intercept(&self, disallow: bool) {
        self.disallowed.set(disallow);
        self.toggles.borrow_mut().push(disallow);
    }
}

/// Fake dragged surface whose committed geometry tracks applied
/// positions immediately, like a view whose position setters take
/// effect synchronously.
pub struct FakeSurface {
    position: Cell<Point>,
    size: Cell<Size>,
    applied: RefCell<Vec<Point>>,
}

impl FakeSurface {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            position: Cell::new(Point::new(x, y)),
            size: Cell::new(Size::new(width, height)),
            applied: RefCell::new(Vec::new()),
        })
    }

    pub fn origin(&self) -> Point {
        self.position.get()
    }

    pub fn applied_positions(&self) -> Vec<Point> {
        self.applied.borrow().clone()
    }
}

impl DragSurface for FakeSurface {
    fn position(&self) -> Point {
        self.position.get()
    }

    fn size(&self) -> Size {
        self.size.get()
    }

    fn set_position(&self, position: Point) {
        self.position.set(position);
        self.applied.borrow_mut().push(position);
    }
}
