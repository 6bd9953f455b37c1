//! Window manager core for the retro desktop shell
//!
//! This crate holds all the state behind the browser desktop; the page only
//! classifies pointer events and draws what the engine reports:
//! - Window registry (open, close, minimize, maximize, focus, z-order)
//! - Pointer routing (drag, resize and rubber-band gestures)
//! - Window geometry (viewport clamping, minimum-size resizing)
//! - Taskbar buttons derived from the open windows
//! - Desktop icon selection
//! - Start menu, context menus and the taskbar calendar
//! - Login and shutdown screens
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`geometry`]: Drag and resize arithmetic
//! - [`window`]: Window table, lifecycle and stacking
//! - [`input`]: Pointer targets and the gesture state machine
//! - [`desktop`]: Icons and their selection
//! - [`selection`]: Rubber-band rectangle and hit testing
//! - [`taskbar`]: Taskbar button projection
//! - [`chrome`]: Start menu, context menus, calendar popup, session screens
//! - [`calendar`]: Month grid behind the taskbar clock
//! - [`config`]: Shell configuration
//!
//! ## Example
//!
//! ```rust
//! use retro_desktop::{DesktopEngine, PointerTarget, Rect, ShellConfig, Size, Vec2, WindowConfig};
//!
//! let mut engine = DesktopEngine::new(ShellConfig {
//!     viewport: Size::new(1200.0, 800.0),
//!     windows: vec![WindowConfig::new("about", "About Me", Rect::new(100.0, 100.0, 400.0, 300.0))],
//!     ..Default::default()
//! });
//!
//! engine.open_window("about");
//! engine.pointer_down(&PointerTarget::TitleBar("about".into()), Vec2::new(150.0, 110.0));
//! engine.pointer_move(Vec2::new(190.0, 130.0));
//! engine.pointer_up();
//!
//! assert_eq!(engine.windows().get("about").unwrap().bounds.position(), Vec2::new(140.0, 120.0));
//! ```

pub mod math;
pub mod geometry;
pub mod window;
pub mod input;
pub mod desktop;
pub mod selection;
pub mod taskbar;
pub mod chrome;
pub mod calendar;
pub mod config;
pub mod error;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use geometry::{drag_position, resize_bounds, ResizeDirection, MIN_WINDOW_SIZE};
pub use window::{Visibility, Window, WindowConfig, WindowId, WindowRegistry, WindowState};
pub use input::{Anchor, Gesture, GestureKind, InputResult, PointerRouter, PointerTarget};
pub use desktop::{Desktop, DesktopIcon, IconId};
pub use selection::SelectionBox;
pub use taskbar::TaskbarEntry;
pub use chrome::{CalendarPopup, ContextMenu, DesktopMenuAction, Session, ShellChrome, TaskbarAction};
pub use calendar::{CalendarDate, CalendarDay, CalendarMonth};
pub use config::ShellConfig;
pub use error::DesktopError;

pub use engine::DesktopEngine;
