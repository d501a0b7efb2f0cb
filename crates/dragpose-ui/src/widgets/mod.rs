//! Draggable widget adapters over the shared drag controller

pub mod drag_frame;
pub mod draggable_view;

pub use drag_frame::*;
pub use draggable_view::*;
