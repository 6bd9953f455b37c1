//! Rubber-band selection over desktop icons

use serde::Serialize;
use crate::desktop::{DesktopIcon, IconId};
use crate::math::{Rect, Vec2};

/// Rectangle dragged out on the desktop background
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SelectionBox {
    /// Pointer position at gesture start
    pub origin: Vec2,
    /// Latest pointer position
    pub current: Vec2,
}

impl SelectionBox {
    /// Start a zero-sized box at the pointer
    pub fn new(origin: Vec2) -> Self {
        Self { origin, current: origin }
    }

    /// Normalized rectangle (left <= right, top <= bottom)
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.origin, self.current)
    }
}

/// Ids of the icons whose bounds overlap `area`, in icon order.
///
/// Touching edges count as overlap.
pub fn select_icons(area: Rect, icons: &[DesktopIcon]) -> Vec<IconId> {
    icons
        .iter()
        .filter(|icon| icon.bounds.touches(&area))
        .map(|icon| icon.id.clone())
        .collect()
}
