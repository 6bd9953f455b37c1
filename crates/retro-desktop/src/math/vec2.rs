//! 2D vector for pointer positions and deltas

use serde::{Deserialize, Serialize};

/// Pointer position or pointer delta in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_delta() {
        let anchor = Vec2::new(120.0, 40.0);
        let pointer = Vec2::new(100.0, 90.0);

        let delta = pointer - anchor;
        assert!((delta.x - (-20.0)).abs() < 0.001);
        assert!((delta.y - 50.0).abs() < 0.001);

        let back = anchor + delta;
        assert_eq!(back, pointer);
    }

    #[test]
    fn test_vec2_min_max() {
        let a = Vec2::new(60.0, 10.0);
        let b = Vec2::new(10.0, 60.0);
        assert_eq!(a.min(b), Vec2::new(10.0, 10.0));
        assert_eq!(a.max(b), Vec2::new(60.0, 60.0));
    }
}
