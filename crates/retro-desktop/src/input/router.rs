//! Pointer router state machine

use tracing::{debug, trace};
use crate::geometry::ResizeDirection;
use crate::math::Vec2;
use crate::window::WindowId;
use super::{Anchor, Gesture};

/// Holder of the one gesture in progress
///
/// A gesture can only start when none is active, and it always ends on
/// pointer-up. The router does not know about windows; the engine decides
/// which gesture a press starts and what a move does with it.
#[derive(Debug, Default)]
pub struct PointerRouter {
    gesture: Gesture,
}

impl PointerRouter {
    /// Create a router with no gesture
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current gesture
    #[inline]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.gesture.is_none()
    }

    /// Start a gesture. Returns false, leaving the current one in place,
    /// if a gesture is already active.
    pub fn begin(&mut self, gesture: Gesture) -> bool {
        if self.is_active() {
            debug!(active = ?self.gesture.kind(), requested = ?gesture.kind(), "gesture already active");
            return false;
        }
        trace!(kind = ?gesture.kind(), "gesture started");
        self.gesture = gesture;
        true
    }

    /// Start window drag
    pub fn begin_drag(&mut self, window_id: WindowId, anchor: Anchor) -> bool {
        self.begin(Gesture::Drag { window_id, anchor })
    }

    /// Start window resize
    pub fn begin_resize(&mut self, window_id: WindowId, direction: ResizeDirection, anchor: Anchor) -> bool {
        self.begin(Gesture::Resize { window_id, direction, anchor })
    }

    /// Start rubber-band selection
    pub fn begin_rubber_band(&mut self, origin: Vec2) -> bool {
        self.begin(Gesture::RubberBand { origin })
    }

    /// End the current gesture, whatever it is, and hand it back
    pub fn end(&mut self) -> Gesture {
        let gesture = std::mem::take(&mut self.gesture);
        trace!(kind = ?gesture.kind(), "gesture ended");
        gesture
    }
}
