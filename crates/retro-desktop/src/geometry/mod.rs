//! Drag and resize geometry
//!
//! Pure functions over an anchor snapshot (the window bounds when the gesture
//! started) and the pointer delta since then. Nothing here touches window
//! state; the caller applies the result.

mod direction;

pub use direction::ResizeDirection;

use crate::math::{Rect, Size, Vec2};

/// Smallest size a resize gesture may produce
pub const MIN_WINDOW_SIZE: Size = Size::new(200.0, 150.0);

/// Calculate the window position for a drag.
///
/// The window keeps its size and stays fully inside the area above the
/// taskbar. A window larger than that area is pinned to the top-left.
pub fn drag_position(anchor: Rect, delta: Vec2, viewport: Size, taskbar_height: f32) -> Vec2 {
    let max_x = viewport.width - anchor.width;
    let max_y = viewport.height - taskbar_height - anchor.height;

    let target = anchor.position() + delta;
    Vec2::new(
        target.x.min(max_x).max(0.0),
        target.y.min(max_y).max(0.0),
    )
}

/// Calculate new bounds after a resize.
///
/// East and south edges always follow the pointer and are floor-clamped to
/// `min_size`. West and north edges only move when the resulting size is at
/// least `min_size`; otherwise that axis keeps its anchor values.
pub fn resize_bounds(anchor: Rect, delta: Vec2, direction: ResizeDirection, min_size: Size) -> Rect {
    let mut bounds = anchor;

    if direction.east {
        bounds.width = (anchor.width + delta.x).max(min_size.width);
    }
    if direction.west {
        let width = anchor.width - delta.x;
        if width >= min_size.width {
            bounds.width = width;
            bounds.x = anchor.x + delta.x;
        }
    }
    if direction.south {
        bounds.height = (anchor.height + delta.y).max(min_size.height);
    }
    if direction.north {
        let height = anchor.height - delta.y;
        if height >= min_size.height {
            bounds.height = height;
            bounds.y = anchor.y + delta.y;
        }
    }

    bounds
}
