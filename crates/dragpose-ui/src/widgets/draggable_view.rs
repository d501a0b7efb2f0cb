//! Draggable leaf widget.
//!
//! The whole surface is the drag handle: every pointer event drives the
//! drag controller directly and the widget reports the event handled.
//! Movement is not gated on the slop classification, so even tap-range
//! motion nudges the view.

use std::rc::Rc;

use dragpose_foundation::{
    DragConfig, DragController, DragSurface, InterceptGuard, ParentBounds, PointerEvent,
    PointerInputTarget, PointerPhase,
};
use dragpose_geometry::Rect;

pub struct DraggableView {
    controller: DragController,
    surface: Rc<dyn DragSurface>,
    enabled: bool,
}

impl DraggableView {
    pub fn new(
        surface: Rc<dyn DragSurface>,
        parent: Rc<dyn ParentBounds>,
        intercept: Rc<dyn InterceptGuard>,
    ) -> Self {
        Self::with_config(surface, parent, intercept, DragConfig::view())
    }

    pub fn with_config(
        surface: Rc<dyn DragSurface>,
        parent: Rc<dyn ParentBounds>,
        intercept: Rc<dyn InterceptGuard>,
        config: DragConfig,
    ) -> Self {
        Self {
            controller: DragController::new(surface.clone(), parent, intercept, config),
            surface,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    fn frame(&self) -> Rect {
        Rect::from_origin_size(self.surface.position(), self.surface.size())
    }
}

impl PointerInputTarget for DraggableView {
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match event.phase {
            PointerPhase::Start => self.controller.on_gesture_start(event.position),
            PointerPhase::Move => {
                self.controller.on_gesture_move(event.position);
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.controller.on_gesture_end(event.position)
            }
        }
        true
    }

    fn hit_test(&self, x: f32, y: f32) -> bool {
        self.enabled && self.frame().contains(x, y)
    }
}
