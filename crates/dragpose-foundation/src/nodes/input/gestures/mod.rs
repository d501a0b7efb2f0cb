pub mod drag;
pub mod slop;

pub use drag::{
    BoundsPolicy, DragConfig, DragController, DragPhase, DragSurface, InterceptGuard, ParentBounds,
};
pub use slop::TouchSlopDetector;
