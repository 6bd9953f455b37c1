//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle: `x`/`y` are the left/top offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Create the rectangle spanned by two arbitrary corners.
    ///
    /// The corners may be given in any order; the result always has
    /// non-negative width and height.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Check if two rectangles overlap, counting shared edges as overlap
    #[inline]
    pub fn touches(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// Same size, moved so the top-left corner is at `pos`
    #[inline]
    pub fn with_position(&self, pos: Vec2) -> Rect {
        Rect::new(pos.x, pos.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(!rect.contains(Vec2::new(110.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let r = Rect::from_corners(Vec2::new(60.0, 10.0), Vec2::new(10.0, 60.0));
        assert!((r.x - 10.0).abs() < 0.001);
        assert!((r.y - 10.0).abs() < 0.001);
        assert!((r.width - 50.0).abs() < 0.001);
        assert!((r.height - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_touches_includes_shared_edges() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let edge = Rect::new(50.0, 50.0, 10.0, 10.0);
        let apart = Rect::new(50.5, 0.0, 10.0, 10.0);

        assert!(a.touches(&edge));
        assert!(edge.touches(&a));
        assert!(!a.touches(&apart));
    }

    #[test]
    fn test_rect_with_position() {
        let r = Rect::new(10.0, 20.0, 400.0, 300.0).with_position(Vec2::new(0.0, 5.0));
        assert_eq!(r, Rect::new(0.0, 5.0, 400.0, 300.0));
        assert_eq!(r.size(), Size::new(400.0, 300.0));
        assert_eq!(r.position(), Vec2::new(0.0, 5.0));
    }
}
