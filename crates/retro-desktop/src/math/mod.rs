//! Viewport-space geometry types
//!
//! Every coordinate in the shell is in viewport pixels: the origin is the
//! top-left corner of the browser viewport, y grows downwards.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
