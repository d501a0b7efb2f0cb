pub mod dispatcher;
pub mod gestures;
pub mod target;
pub mod types;

pub use dispatcher::PointerDispatcher;
pub use target::PointerInputTarget;
pub use types::{PointerEvent, PointerEventKind, PointerId, PointerPhase};

pub mod prelude {
    pub use super::dispatcher::PointerDispatcher;
    pub use super::target::PointerInputTarget;
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
}
