//! Draggable widgets for Dragpose

pub mod widgets;

#[cfg(test)]
mod tests;

pub use widgets::*;

pub mod prelude {
    pub use crate::widgets::{DragFrame, DraggableView};
    pub use dragpose_foundation::prelude::*;
}
