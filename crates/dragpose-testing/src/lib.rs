//! Testing utilities and harness for Dragpose

pub mod fakes;
pub mod robot;

// Re-export testing utilities
pub use fakes::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fakes::{FakeParent, FakeSurface};
    pub use crate::robot::DragRobot;
}
