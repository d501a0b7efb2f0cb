//! Pointer input dispatcher plumbing.
//!
//! Hosts enqueue pointer events here and drain them to a handler one at
//! a time, on the event-dispatch thread, each event to completion
//! before the next.

use smallvec::SmallVec;

use super::types::{PointerEvent, PointerId};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[PointerEvent; 4]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event.id, event);
        }
    }
}
