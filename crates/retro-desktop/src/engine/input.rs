//! Pointer gestures, clicks and context menus

use tracing::{debug, trace};
use crate::geometry::{drag_position, resize_bounds, ResizeDirection};
use crate::input::{Anchor, Gesture, InputResult, PointerTarget};
use crate::math::Vec2;
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle pointer down (mouse button or first touch)
    ///
    /// Starts a drag on a titlebar, a resize on a handle and a rubber band on
    /// the desktop background. Pressing any part of a window raises it. A
    /// press while a gesture is in progress, or while a session screen is
    /// up, is ignored.
    pub fn pointer_down(&mut self, target: &PointerTarget, pos: Vec2) -> InputResult {
        if self.is_session_locked() {
            trace!("pointer down behind session screen ignored");
            return InputResult::Unhandled;
        }
        if self.input.is_active() {
            debug!(active = ?self.input.gesture().kind(), "pointer down during gesture ignored");
            return InputResult::Unhandled;
        }

        match target {
            PointerTarget::TitleBar(id) => self.press_window(id.as_str(), pos, None),
            PointerTarget::ResizeHandle(id, direction) => self.press_window(id.as_str(), pos, Some(*direction)),
            PointerTarget::WindowBody(id) => self.press_window_body(id.as_str()),
            PointerTarget::Desktop => {
                self.desktop.begin_selection(pos);
                self.input.begin_rubber_band(pos);
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Raise a window and start a drag (`handle` = None) or resize on it
    fn press_window(&mut self, id: &str, pos: Vec2, handle: Option<ResizeDirection>) -> InputResult {
        let Some(window) = self.windows.get(id) else {
            debug!(window = id, "pointer down on unknown window");
            return InputResult::Unhandled;
        };
        if !window.is_visible() {
            trace!(window = id, "pointer down on hidden window");
            return InputResult::Unhandled;
        }

        let window_id = window.id.clone();
        let maximized = window.maximized;
        let anchor = Anchor {
            bounds: window.bounds,
            pointer: pos,
        };

        self.windows.focus(id);
        if maximized {
            return InputResult::Handled;
        }

        match handle {
            None => self.input.begin_drag(window_id, anchor),
            Some(direction) => self.input.begin_resize(window_id, direction, anchor),
        };
        InputResult::Handled
    }

    /// Raise a window pressed outside its titlebar and handles
    fn press_window_body(&mut self, id: &str) -> InputResult {
        let visible = self.windows.get(id).is_some_and(|w| w.is_visible());
        if visible {
            self.windows.focus(id);
        }
        InputResult::from_changed(visible)
    }

    /// Handle pointer move
    ///
    /// Moves or resizes the gesture's window, or stretches the rubber band.
    /// Focus and z-order never change here.
    pub fn pointer_move(&mut self, pos: Vec2) -> InputResult {
        match self.input.gesture() {
            Gesture::None => InputResult::Unhandled,
            Gesture::Drag { window_id, anchor } => {
                let position = drag_position(anchor.bounds, anchor.delta(pos), self.viewport, self.taskbar_height);
                self.windows.move_to(window_id.as_str(), position);
                InputResult::Handled
            }
            Gesture::Resize { window_id, direction, anchor } => {
                let bounds = resize_bounds(anchor.bounds, anchor.delta(pos), *direction, self.min_window_size);
                self.windows.set_bounds(window_id.as_str(), bounds);
                InputResult::Handled
            }
            Gesture::RubberBand { .. } => {
                self.desktop.update_selection(pos);
                InputResult::Handled
            }
        }
    }

    /// Handle pointer up, wherever it happens
    pub fn pointer_up(&mut self) -> InputResult {
        match self.input.end() {
            Gesture::None => InputResult::Unhandled,
            Gesture::RubberBand { .. } => {
                let committed = self.desktop.end_selection();
                debug!(selected = self.desktop.selected().len(), committed, "rubber band finished");
                InputResult::Handled
            }
            Gesture::Drag { .. } | Gesture::Resize { .. } => InputResult::Handled,
        }
    }

    /// Handle a click (press and release on the same element)
    ///
    /// Closes the start menu, context menus and calendar when the click lands
    /// outside them, selects icons, deselects on the background and
    /// activates taskbar buttons.
    pub fn click(&mut self, target: &PointerTarget) -> InputResult {
        if self.is_session_locked() {
            return InputResult::Unhandled;
        }

        let mut changed = match target {
            PointerTarget::StartButton => {
                self.chrome.toggle_start_menu();
                true
            }
            PointerTarget::StartMenu => false,
            _ => self.chrome.close_start_menu(),
        };

        if !matches!(target, PointerTarget::ContextMenu) {
            changed |= self.chrome.hide_context_menu().is_some();
        }

        if !matches!(target, PointerTarget::Clock | PointerTarget::Calendar) {
            changed |= self.chrome.close_calendar();
        }

        changed |= match target {
            PointerTarget::Desktop => self.desktop.click_background(),
            PointerTarget::Icon(id) => {
                self.desktop.select_only(id);
                true
            }
            PointerTarget::TaskbarEntry(id) => {
                self.activate_taskbar_entry(id.as_str());
                true
            }
            _ => false,
        };

        InputResult::from_changed(changed)
    }

    /// Handle a double click. Double-clicking an icon opens its window.
    pub fn double_click(&mut self, target: &PointerTarget) -> InputResult {
        if self.is_session_locked() {
            return InputResult::Unhandled;
        }
        let PointerTarget::Icon(id) = target else {
            return InputResult::Unhandled;
        };
        let Some(window_id) = self.desktop.icon(id).and_then(|icon| icon.opens.clone()) else {
            trace!(icon = %id, "icon opens nothing");
            return InputResult::Unhandled;
        };

        self.windows.open(window_id.as_str());
        InputResult::Handled
    }

    /// Handle a right click.
    ///
    /// Opens the desktop menu on the background and the window menu on a
    /// taskbar button; anything else keeps the browser's own menu.
    pub fn context_menu(&mut self, target: &PointerTarget, pos: Vec2) -> InputResult {
        if self.is_session_locked() {
            return InputResult::Unhandled;
        }
        match target {
            PointerTarget::Desktop => {
                self.chrome.show_desktop_menu(pos, self.viewport, self.taskbar_height);
                InputResult::Handled
            }
            PointerTarget::TaskbarEntry(id) => {
                if !self.windows.open_list().contains(id) {
                    return InputResult::Unhandled;
                }
                self.chrome.show_taskbar_menu(id.clone(), pos, self.viewport, self.taskbar_height);
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }
}
