//! Gesture state for a pointer interaction

use serde::Serialize;
use crate::geometry::ResizeDirection;
use crate::math::{Rect, Vec2};
use crate::window::WindowId;

/// Window bounds and pointer position captured at pointer-down
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Anchor {
    pub bounds: Rect,
    pub pointer: Vec2,
}

impl Anchor {
    /// Pointer movement since the gesture started
    #[inline]
    pub fn delta(&self, pointer: Vec2) -> Vec2 {
        pointer - self.pointer
    }
}

/// Gesture discriminant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    None,
    Drag,
    Resize,
    RubberBand,
}

/// One pointer interaction, from press to release
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No button held, or the press landed on nothing we track
    #[default]
    None,
    /// Moving a window by its titlebar
    Drag {
        window_id: WindowId,
        anchor: Anchor,
    },
    /// Resizing a window by one of its handles
    Resize {
        window_id: WindowId,
        direction: ResizeDirection,
        anchor: Anchor,
    },
    /// Selecting icons with a rectangle on the desktop background
    RubberBand {
        origin: Vec2,
    },
}

impl Gesture {
    /// Get the gesture discriminant
    pub fn kind(&self) -> GestureKind {
        match self {
            Gesture::None => GestureKind::None,
            Gesture::Drag { .. } => GestureKind::Drag,
            Gesture::Resize { .. } => GestureKind::Resize,
            Gesture::RubberBand { .. } => GestureKind::RubberBand,
        }
    }

    /// Check if no gesture is in progress
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Gesture::None)
    }

    /// Get the target window if this is a window gesture
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            Gesture::Drag { window_id, .. } | Gesture::Resize { window_id, .. } => Some(window_id),
            _ => None,
        }
    }
}
