//! Draggable container widget.
//!
//! Children keep receiving events while the gesture is in tap range.
//! Once movement exceeds the slop the frame claims the stream through
//! its interception probe and drags itself within the parent's bounds,
//! consuming the move events it owns.

use std::rc::Rc;

use dragpose_foundation::{
    DragConfig, DragController, DragSurface, InterceptGuard, ParentBounds, PointerEvent,
    PointerInputTarget, PointerPhase,
};
use dragpose_geometry::Rect;

pub struct DragFrame {
    controller: DragController,
    surface: Rc<dyn DragSurface>,
    enabled: bool,
}

impl DragFrame {
    pub fn new(
        surface: Rc<dyn DragSurface>,
        parent: Rc<dyn ParentBounds>,
        intercept: Rc<dyn InterceptGuard>,
    ) -> Self {
        Self::with_config(surface, parent, intercept, DragConfig::frame())
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

impl PointerInputTarget for DragFrame {
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match event.phase {
            PointerPhase::Start => self.controller.on_gesture_start(event.position),
            PointerPhase::Move => {
                if self.controller.on_gesture_move(event.position) {
                    // Claimed gestures own their move events; tap-range
                    // moves fall through to child click handling.
                    event.consume();
                }
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.controller.on_gesture_end(event.position)
            }
        }
        true
    }

    fn on_intercept_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match event.phase {
            PointerPhase::Start => {
                self.controller.on_gesture_start(event.position);
                false
            }
            PointerPhase::Move => {
                let was_confirmed = self.controller.is_drag_confirmed();
                let claimed = self.controller.on_gesture_move(event.position);
                if claimed && !was_confirmed {
                    log::debug!("DragFrame intercepting pointer stream");
                }
                claimed
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.controller.on_gesture_end(event.position);
                false
            }
        }
    }

    fn hit_test(&self, x: f32, y: f32) -> bool {
        self.enabled && self.frame().contains(x, y)
    }
}
