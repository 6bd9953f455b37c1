//! Pointer input routing
//!
//! Classifies what a pointer-down landed on and holds the single gesture
//! that lives until the matching pointer-up.

mod router;
mod gesture;
mod target;
mod result;

pub use router::PointerRouter;
pub use gesture::{Anchor, Gesture, GestureKind};
pub use target::PointerTarget;
pub use result::InputResult;
