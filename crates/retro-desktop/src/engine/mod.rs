//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window operations, taskbar and keyboard shortcuts
//! - `input`: Pointer gestures, clicks and context menus
//! - `shell`: Start menu, calendar, desktop menu and session screens

mod windows;
mod input;
mod shell;

use tracing::debug;
use crate::chrome::ShellChrome;
use crate::config::ShellConfig;
use crate::desktop::Desktop;
use crate::error::DesktopError;
use crate::input::PointerRouter;
use crate::math::{Rect, Size};
use crate::taskbar::{taskbar_entries, TaskbarEntry};
use crate::window::{WindowId, WindowRegistry};

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for the shell, owning:
/// - Window registry (lifecycle, focus, z-order)
/// - Desktop (icons and their selection)
/// - Pointer router (the one gesture in progress)
/// - Shell chrome (start menu, context menus, calendar, session screens)
///
/// Everything is mutated synchronously from the page's event handlers, one
/// event at a time.
pub struct DesktopEngine {
    /// Viewport size in pixels
    viewport: Size,
    /// Height of the taskbar along the bottom edge
    taskbar_height: f32,
    /// Smallest size a resize may produce
    min_window_size: Size,
    /// Window registry
    windows: WindowRegistry,
    /// Desktop icons and selection
    desktop: Desktop,
    /// Pointer router
    input: PointerRouter,
    /// Start menu and context menus
    chrome: ShellChrome,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl DesktopEngine {
    /// Create an engine from a configuration, without validating it.
    ///
    /// Duplicate window ids keep their first definition.
    pub fn new(config: ShellConfig) -> Self {
        debug!(
            windows = config.windows.len(),
            icons = config.icons.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "desktop engine created"
        );
        Self {
            viewport: config.viewport,
            taskbar_height: config.taskbar_height,
            min_window_size: config.min_window_size,
            windows: WindowRegistry::new(config.windows, config.base_z_index),
            desktop: Desktop::new(config.icons),
            input: PointerRouter::new(),
            chrome: ShellChrome::new(),
        }
    }

    /// Create an engine after validating the configuration
    pub fn try_new(config: ShellConfig) -> Result<Self, DesktopError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }

    /// Viewport size
    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Taskbar height
    #[inline]
    pub fn taskbar_height(&self) -> f32 {
        self.taskbar_height
    }

    /// Area a maximized window covers
    pub fn work_area(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.viewport.width,
            (self.viewport.height - self.taskbar_height).max(0.0),
        )
    }

    /// Read access to the window registry
    #[inline]
    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    /// Read access to the desktop icons and selection
    #[inline]
    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    /// Read access to the pointer router
    #[inline]
    pub fn input(&self) -> &PointerRouter {
        &self.input
    }

    /// Read access to the start and context menus
    #[inline]
    pub fn chrome(&self) -> &ShellChrome {
        &self.chrome
    }

    /// Currently focused window, if any
    #[inline]
    pub fn focused(&self) -> Option<&WindowId> {
        self.windows.focused()
    }

    /// Current taskbar buttons
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        taskbar_entries(&self.windows)
    }
}
