//! Foundation elements for Dragpose: pointer input and drag gestures

pub mod gesture_constants;
pub mod nodes;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use nodes::input::gestures::{
    BoundsPolicy, DragConfig, DragController, DragPhase, DragSurface, InterceptGuard,
    ParentBounds, TouchSlopDetector,
};
pub use nodes::input::{
    PointerDispatcher, PointerEvent, PointerEventKind, PointerId, PointerInputTarget,
    PointerPhase,
};

pub mod prelude {
    pub use crate::gesture_constants::TOUCH_SLOP;
    pub use crate::nodes::input::gestures::{
        BoundsPolicy, DragConfig, DragController, DragPhase, DragSurface, InterceptGuard,
        ParentBounds, TouchSlopDetector,
    };
    pub use crate::nodes::input::prelude::*;
}
