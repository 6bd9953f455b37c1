//! Window registry module
//!
//! Provides the fixed window table, window lifecycle, focus and z-order.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod registry;

pub use window::{Visibility, Window, WindowId, WindowState};
pub use config::WindowConfig;
pub use registry::WindowRegistry;
