//! Window operations, taskbar and keyboard shortcuts

use tracing::debug;
use crate::chrome::{ContextMenu, TaskbarAction};
use crate::input::InputResult;
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window, or raise it if already open
    pub fn open_window(&mut self, id: &str) {
        self.windows.open(id);
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        self.windows.close(id);
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &str) {
        self.windows.minimize(id);
    }

    /// Toggle a window between maximized and normal
    pub fn maximize_window(&mut self, id: &str) {
        self.windows.maximize(id);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus(id);
    }

    /// Taskbar button pressed: show the window if minimized and raise it
    pub fn activate_taskbar_entry(&mut self, id: &str) {
        self.windows.open(id);
    }

    /// Run an entry of the taskbar context menu.
    ///
    /// The menu is hidden afterwards whatever the action. Returns
    /// `Unhandled` if no taskbar menu was open.
    pub fn taskbar_action(&mut self, action: TaskbarAction) -> InputResult {
        let window_id = match self.chrome.hide_context_menu() {
            Some(ContextMenu::Taskbar { window_id, .. }) => window_id,
            _ => return InputResult::Unhandled,
        };
        let id = window_id.as_str();
        debug!(window = id, ?action, "taskbar menu action");

        match action {
            TaskbarAction::Restore => {
                self.windows.open(id);
                self.windows.set_maximized(id, false);
            }
            TaskbarAction::Minimize => self.windows.minimize(id),
            TaskbarAction::Maximize => {
                self.windows.open(id);
                self.windows.set_maximized(id, true);
            }
            TaskbarAction::Close => self.windows.close(id),
        }
        InputResult::Handled
    }

    /// Handle a key press. Escape closes the focused window.
    pub fn key_down(&mut self, key: &str) -> InputResult {
        if key != "Escape" || self.is_session_locked() {
            return InputResult::Unhandled;
        }
        match self.windows.focused().cloned() {
            Some(id) => {
                debug!(window = %id, "escape closes focused window");
                self.windows.close(id.as_str());
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }
}
