//! WASM exports for the desktop shell
//!
//! The page classifies every pointer event into a target kind string plus
//! optional window/icon id and resize direction, forwards it here, and redraws
//! from the JSON snapshots.

use wasm_bindgen::prelude::*;

use crate::calendar::CalendarDate;
use crate::chrome::{DesktopMenuAction, TaskbarAction};
use crate::config::ShellConfig;
use crate::engine::DesktopEngine;
use crate::error::DesktopError;
use crate::input::PointerTarget;
use crate::math::Vec2;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn js_error(err: DesktopError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Decode a target, logging rejected ones. A rejected target acts on nothing.
fn parse_target(kind: &str, id: Option<String>, direction: Option<String>) -> Option<PointerTarget> {
    match PointerTarget::parse(kind, id.as_deref(), direction.as_deref()) {
        Ok(target) => Some(target),
        Err(e) => {
            log(&format!("[retro-desktop] ignoring pointer event: {}", e));
            None
        }
    }
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller from a JSON shell configuration.
    ///
    /// An empty string gives the default (empty) shell.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<DesktopController, JsValue> {
        console_error_panic_hook::set_once();

        let config = if config_json.trim().is_empty() {
            ShellConfig::default()
        } else {
            ShellConfig::from_json(config_json).map_err(js_error)?
        };
        let engine = DesktopEngine::try_new(config).map_err(js_error)?;

        log(&format!(
            "[retro-desktop] shell ready: {} windows, {} icons",
            engine.windows().count(),
            engine.desktop().icons().len()
        ));
        Ok(Self { engine })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Take the viewport size from the browser window
    #[wasm_bindgen]
    pub fn sync_viewport(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let width = window.inner_width()?.as_f64().unwrap_or_default();
        let height = window.inner_height()?.as_f64().unwrap_or_default();
        self.engine.resize(width as f32, height as f32);
        Ok(())
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer pressed on a target. Returns true if the shell handled it.
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, kind: &str, id: Option<String>, direction: Option<String>, x: f32, y: f32) -> bool {
        parse_target(kind, id, direction)
            .map(|target| self.engine.pointer_down(&target, Vec2::new(x, y)).is_handled())
            .unwrap_or(false)
    }

    /// Pointer moved anywhere in the document
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_move(Vec2::new(x, y)).is_handled()
    }

    /// Pointer released anywhere in the document
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up().is_handled()
    }

    /// Click on a target
    #[wasm_bindgen]
    pub fn click(&mut self, kind: &str, id: Option<String>) -> bool {
        parse_target(kind, id, None)
            .map(|target| self.engine.click(&target).is_handled())
            .unwrap_or(false)
    }

    /// Double click on a target
    #[wasm_bindgen]
    pub fn double_click(&mut self, kind: &str, id: Option<String>) -> bool {
        parse_target(kind, id, None)
            .map(|target| self.engine.double_click(&target).is_handled())
            .unwrap_or(false)
    }

    /// Right click on a target. Returns true if the page should suppress the
    /// browser's own menu.
    #[wasm_bindgen]
    pub fn context_menu(&mut self, kind: &str, id: Option<String>, x: f32, y: f32) -> bool {
        parse_target(kind, id, None)
            .map(|target| self.engine.context_menu(&target, Vec2::new(x, y)).is_handled())
            .unwrap_or(false)
    }

    /// Key pressed
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.engine.key_down(key).is_handled()
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str) {
        self.engine.open_window(id);
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.engine.close_window(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.engine.minimize_window(id);
    }

    /// Toggle maximized
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) {
        self.engine.maximize_window(id);
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<String> {
        self.engine.focused().map(|id| id.to_string())
    }

    /// Get all windows as JSON, ordered by id
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let work_area = self.engine.work_area();
        let windows: Vec<serde_json::Value> = self
            .engine
            .windows()
            .all_windows()
            .into_iter()
            .map(|w| {
                let bounds = if w.maximized { work_area } else { w.bounds };
                serde_json::json!({
                    "id": w.id,
                    "title": w.title,
                    "state": w.state(),
                    "focused": self.engine.windows().is_active(w.id.as_str()),
                    "zIndex": w.z_index,
                    "x": bounds.x,
                    "y": bounds.y,
                    "width": bounds.width,
                    "height": bounds.height,
                })
            })
            .collect();

        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Taskbar
    // =========================================================================

    /// Get the taskbar buttons as JSON, in first-open order
    #[wasm_bindgen]
    pub fn get_taskbar_json(&self) -> String {
        serde_json::to_string(&self.engine.taskbar_entries()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Counter bumped whenever the taskbar needs redrawing
    #[wasm_bindgen]
    pub fn taskbar_generation(&self) -> f64 {
        self.engine.windows().generation() as f64
    }

    /// Run a taskbar context menu entry (`restore`, `minimize`, `maximize`, `close`)
    #[wasm_bindgen]
    pub fn taskbar_action(&mut self, action: &str) -> bool {
        match action.parse::<TaskbarAction>() {
            Ok(action) => self.engine.taskbar_action(action).is_handled(),
            Err(e) => {
                log(&format!("[retro-desktop] {}", e));
                false
            }
        }
    }

    // =========================================================================
    // Desktop and chrome
    // =========================================================================

    /// Get selected icons and the rubber band as JSON
    #[wasm_bindgen]
    pub fn get_selection_json(&self) -> String {
        let desktop = self.engine.desktop();
        serde_json::to_string(&serde_json::json!({
            "selected": desktop.selected(),
            "box": desktop.selection_box().map(|b| b.rect()),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Open or close the start menu
    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.engine.toggle_start_menu();
    }

    /// Pointer entered "All Programs"
    #[wasm_bindgen]
    pub fn show_all_programs(&mut self) -> bool {
        self.engine.show_all_programs().is_handled()
    }

    /// Pointer left "All Programs" and its panel
    #[wasm_bindgen]
    pub fn hide_all_programs(&mut self) -> bool {
        self.engine.hide_all_programs().is_handled()
    }

    /// Clock clicked: open the calendar on the current month, or close it
    #[wasm_bindgen]
    pub fn toggle_calendar(&mut self) {
        let now = js_sys::Date::new_0();
        match CalendarDate::new(now.get_full_year() as i32, now.get_month() + 1, now.get_date()) {
            Some(today) => self.engine.toggle_calendar(today),
            None => log("[retro-desktop] browser clock returned an invalid date"),
        }
    }

    /// Calendar arrows
    #[wasm_bindgen]
    pub fn change_calendar_month(&mut self, delta: i32) -> bool {
        self.engine.change_calendar_month(delta).is_handled()
    }

    /// Run a desktop context menu entry (`refresh`, `arrange-by-name`)
    #[wasm_bindgen]
    pub fn desktop_menu_action(&mut self, action: &str) -> bool {
        match action.parse::<DesktopMenuAction>() {
            Ok(action) => self.engine.desktop_menu_action(action).is_handled(),
            Err(e) => {
                log(&format!("[retro-desktop] {}", e));
                false
            }
        }
    }

    /// Document scrolled
    #[wasm_bindgen]
    pub fn scroll(&mut self) -> bool {
        self.engine.scroll().is_handled()
    }

    /// Get start menu, context menu, calendar and session state as JSON
    #[wasm_bindgen]
    pub fn get_chrome_json(&self) -> String {
        let chrome = self.engine.chrome();
        let calendar = chrome.calendar().map(|popup| {
            serde_json::json!({
                "year": popup.shown.year,
                "month": popup.shown.month,
                "monthName": popup.shown.name(),
                "days": popup.shown.grid(popup.today),
            })
        });
        serde_json::to_string(&serde_json::json!({
            "session": chrome.session(),
            "startMenuOpen": chrome.is_start_menu_open(),
            "allProgramsOpen": chrome.is_all_programs_open(),
            "contextMenu": chrome.context_menu(),
            "calendar": calendar,
            "workArea": self.engine.work_area(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// "Log Off": show the login screen
    #[wasm_bindgen]
    pub fn log_off(&mut self) {
        self.engine.log_off();
    }

    /// "Shut Down": show the shutdown screen
    #[wasm_bindgen]
    pub fn shut_down(&mut self) {
        self.engine.shut_down();
    }

    /// Leave the login screen
    #[wasm_bindgen]
    pub fn log_in(&mut self) {
        self.engine.log_in();
    }
}
