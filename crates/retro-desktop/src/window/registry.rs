//! Window registry for lifecycle, focus, and z-order

use std::collections::HashMap;

use tracing::{debug, trace, warn};
use crate::math::{Rect, Vec2};
use super::{Visibility, Window, WindowConfig, WindowId};

/// Authoritative model of the shell's windows
///
/// Owns the fixed window table, the open-list (taskbar order), the focus
/// reference and the z-index counter. All of it is private: the rest of the
/// shell mutates windows only through the operations below, and every
/// operation tolerates unknown ids by doing nothing.
pub struct WindowRegistry {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Windows in first-open order (open, maximized or minimized)
    open_list: Vec<WindowId>,
    /// Focused window, if any
    focused: Option<WindowId>,
    /// Last z-index handed out
    z_counter: u32,
    /// Bumped whenever the open-list or focus changes
    generation: u64,
}

impl WindowRegistry {
    /// Create a registry holding the given windows, all closed.
    ///
    /// The first raise hands out `base_z_index + 1`. A repeated id keeps
    /// the first definition.
    pub fn new(configs: impl IntoIterator<Item = WindowConfig>, base_z_index: u32) -> Self {
        let mut windows = HashMap::new();
        for config in configs {
            if windows.contains_key(&config.id) {
                debug!(window = %config.id, "duplicate window definition ignored");
                continue;
            }
            let window = Window {
                id: config.id.clone(),
                title: config.title,
                bounds: config.bounds,
                z_index: 0,
                visibility: Visibility::Closed,
                maximized: false,
            };
            windows.insert(config.id, window);
        }

        Self {
            windows,
            open_list: Vec::new(),
            focused: None,
            z_counter: base_z_index,
            generation: 0,
        }
    }

    /// Open a window, or raise it if it is already open.
    ///
    /// A minimized window comes back in the state it was minimized from,
    /// maximized included. Every call consumes a new z-index.
    pub fn open(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            debug!(window = id, "open: unknown window");
            return;
        };

        if window.visibility != Visibility::Open {
            debug!(window = id, from = ?window.visibility, "window opened");
            window.visibility = Visibility::Open;
        }

        if !self.open_list.iter().any(|w| w == id) {
            self.open_list.push(window.id.clone());
            self.generation += 1;
        }

        self.raise(id);
    }

    /// Close a window.
    ///
    /// Removes it from the open-list and clears focus if it held it. No other
    /// window is promoted to focused.
    pub fn close(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            debug!(window = id, "close: unknown window");
            return;
        };

        window.visibility = Visibility::Closed;
        window.maximized = false;
        debug!(window = id, "window closed");

        let before = self.open_list.len();
        self.open_list.retain(|w| w != id);
        if self.open_list.len() != before {
            self.generation += 1;
        }

        if self.focused.as_ref().is_some_and(|f| f == id) {
            self.focused = None;
            self.generation += 1;
        }
    }

    /// Minimize a visible window.
    ///
    /// The window stays in the open-list and focus is left untouched.
    pub fn minimize(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            debug!(window = id, "minimize: unknown window");
            return;
        };
        if !window.is_visible() {
            trace!(window = id, visibility = ?window.visibility, "minimize: window not visible");
            return;
        }

        window.visibility = Visibility::Minimized;
        debug!(window = id, maximized = window.maximized, "window minimized");
    }

    /// Toggle the maximized flag and raise the window.
    ///
    /// A minimized window only has its flag toggled; it stays hidden and
    /// unfocused until restored. Closed windows are left alone.
    pub fn maximize(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            debug!(window = id, "maximize: unknown window");
            return;
        };
        if window.visibility == Visibility::Closed {
            trace!(window = id, "maximize: window closed");
            return;
        }

        window.maximized = !window.maximized;
        debug!(window = id, maximized = window.maximized, "window maximize toggled");
        if window.is_visible() {
            self.raise(id);
        }
    }

    /// Set the maximized flag of a window without toggling.
    ///
    /// Used by the taskbar context menu, which opens the window first.
    pub fn set_maximized(&mut self, id: &str, maximized: bool) {
        if let Some(window) = self.windows.get_mut(id) {
            window.maximized = maximized;
        }
    }

    /// Focus a visible window (brings to top)
    pub fn focus(&mut self, id: &str) {
        let visible = match self.windows.get(id) {
            Some(window) => window.is_visible(),
            None => {
                debug!(window = id, "focus: unknown window");
                return;
            }
        };

        if visible {
            self.raise(id);
        } else {
            trace!(window = id, "focus: window not visible");
        }
    }

    /// Assign the next z-index and take focus
    fn raise(&mut self, id: &str) {
        let newly_focused = !self.is_active(id);
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        match self.z_counter.checked_add(1) {
            Some(z) => {
                self.z_counter = z;
                window.z_index = z;
                trace!(window = id, z_index = z, "window raised");
            }
            None => warn!(window = id, "z-index space exhausted, window not raised"),
        }

        if newly_focused {
            self.focused = Some(window.id.clone());
            self.generation += 1;
        }
    }

    /// Move a window without changing focus or z-order
    pub fn move_to(&mut self, id: &str, position: Vec2) {
        if let Some(window) = self.windows.get_mut(id) {
            window.bounds = window.bounds.with_position(position);
        }
    }

    /// Replace a window's bounds without changing focus or z-order
    pub fn set_bounds(&mut self, id: &str, bounds: Rect) {
        if let Some(window) = self.windows.get_mut(id) {
            window.bounds = bounds;
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Get the currently focused window ID
    #[inline]
    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    /// Check if a window is the focused one
    #[inline]
    pub fn is_active(&self, id: &str) -> bool {
        self.focused.as_ref().is_some_and(|f| f == id)
    }

    /// Windows in taskbar order
    #[inline]
    pub fn open_list(&self) -> &[WindowId] {
        &self.open_list
    }

    /// Change counter for the open-list and focus
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Last z-index handed out
    #[inline]
    pub fn top_z_index(&self) -> u32 {
        self.z_counter
    }

    /// Get visible windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().filter(|w| w.is_visible()).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get all windows, sorted by id
    pub fn all_windows(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by(|a, b| a.id.cmp(&b.id));
        windows
    }

    /// Find the topmost visible window whose bounds contain a position.
    ///
    /// Maximized windows cover the whole area above the taskbar, which is
    /// described by `maximized_area`.
    pub fn window_at(&self, pos: Vec2, maximized_area: Rect) -> Option<&WindowId> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .find(|w| {
                let rect = if w.maximized { maximized_area } else { w.bounds };
                rect.contains(pos)
            })
            .map(|w| &w.id)
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}
