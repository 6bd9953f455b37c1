//! Start menu, calendar, desktop menu and session screens

use tracing::{debug, trace};
use crate::calendar::CalendarDate;
use crate::chrome::{ContextMenu, DesktopMenuAction, Session};
use crate::input::{Gesture, InputResult};
use super::DesktopEngine;

impl DesktopEngine {
    // =========================================================================
    // Start menu
    // =========================================================================

    /// Open or close the start menu
    pub fn toggle_start_menu(&mut self) {
        self.chrome.toggle_start_menu();
    }

    /// Pointer entered "All Programs" (or the panel itself)
    pub fn show_all_programs(&mut self) -> InputResult {
        InputResult::from_changed(self.chrome.show_all_programs())
    }

    /// Pointer left "All Programs" without moving into the panel
    pub fn hide_all_programs(&mut self) -> InputResult {
        InputResult::from_changed(self.chrome.hide_all_programs())
    }

    // =========================================================================
    // Calendar
    // =========================================================================

    /// Clock clicked: open the calendar on `today`'s month, or close it
    pub fn toggle_calendar(&mut self, today: CalendarDate) {
        if self.is_session_locked() {
            return;
        }
        self.chrome.toggle_calendar(today);
    }

    /// Calendar arrows: page the open calendar by `delta` months
    pub fn change_calendar_month(&mut self, delta: i32) -> InputResult {
        InputResult::from_changed(self.chrome.change_calendar_month(delta))
    }

    // =========================================================================
    // Desktop menu
    // =========================================================================

    /// Run an entry of the desktop context menu.
    ///
    /// The menu is hidden afterwards whatever the action. Returns
    /// `Unhandled` if no desktop menu was open.
    pub fn desktop_menu_action(&mut self, action: DesktopMenuAction) -> InputResult {
        match self.chrome.hide_context_menu() {
            Some(ContextMenu::Desktop { .. }) => {}
            _ => return InputResult::Unhandled,
        }

        match action {
            // The page plays its own refresh flash
            DesktopMenuAction::Refresh => debug!("desktop refresh"),
            // Icons keep their configured layout
            DesktopMenuAction::ArrangeByName => debug!("arrange icons by name"),
        }
        InputResult::Handled
    }

    /// The document scrolled: context menus do not follow, so hide them
    pub fn scroll(&mut self) -> InputResult {
        InputResult::from_changed(self.chrome.hide_context_menu().is_some())
    }

    // =========================================================================
    // Session screens
    // =========================================================================

    /// Current session screen
    #[inline]
    pub fn session(&self) -> Session {
        self.chrome.session()
    }

    /// Check if a session screen covers the desktop
    #[inline]
    pub fn is_session_locked(&self) -> bool {
        self.chrome.session().is_locked()
    }

    /// Show the login screen
    pub fn log_off(&mut self) {
        self.enter_session(Session::LoggedOff);
    }

    /// Show the shutdown screen. The page falls back to `log_off` if the
    /// tab cannot be closed.
    pub fn shut_down(&mut self) {
        self.enter_session(Session::ShuttingDown);
    }

    /// Leave the login screen and bring the desktop back as it was
    pub fn log_in(&mut self) {
        if self.chrome.set_session(Session::Active) {
            debug!(open = self.windows.open_list().len(), "session resumed");
        }
    }

    /// Cover the desktop. Windows keep their state; popups close and any
    /// gesture is dropped.
    fn enter_session(&mut self, session: Session) {
        if !self.chrome.set_session(session) {
            trace!(?session, "session unchanged");
            return;
        }
        if let Gesture::RubberBand { .. } = self.input.end() {
            self.desktop.cancel_selection();
        }
        debug!(?session, "session screen shown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::input::PointerTarget;
    use crate::math::{Rect, Size, Vec2};
    use crate::window::{WindowConfig, WindowState};

    fn create_test_engine() -> DesktopEngine {
        DesktopEngine::new(ShellConfig {
            viewport: Size::new(1200.0, 800.0),
            windows: vec![
                WindowConfig::new("about", "About Me", Rect::new(100.0, 100.0, 400.0, 300.0)),
                WindowConfig::new("cmd", "Command Prompt", Rect::new(200.0, 150.0, 600.0, 400.0)),
            ],
            ..Default::default()
        })
    }

    fn today() -> CalendarDate {
        CalendarDate::new(2024, 11, 20).unwrap()
    }

    #[test]
    fn test_log_off_keeps_window_state() {
        let mut engine = create_test_engine();
        engine.open_window("about");
        engine.maximize_window("about");
        engine.open_window("cmd");
        engine.minimize_window("cmd");
        engine.toggle_start_menu();

        engine.log_off();
        assert_eq!(engine.session(), Session::LoggedOff);
        assert!(!engine.chrome().is_start_menu_open());
        assert_eq!(engine.windows().get("about").unwrap().state(), WindowState::Maximized);
        assert_eq!(engine.windows().get("cmd").unwrap().state(), WindowState::Minimized);
        assert_eq!(engine.taskbar_entries().len(), 2);

        engine.log_in();
        assert_eq!(engine.session(), Session::Active);
        assert_eq!(engine.focused().unwrap(), "cmd");
        assert_eq!(engine.windows().get("about").unwrap().state(), WindowState::Maximized);
    }

    #[test]
    fn test_shut_down_then_login_screen() {
        let mut engine = create_test_engine();
        engine.shut_down();
        assert_eq!(engine.session(), Session::ShuttingDown);
        assert!(engine.is_session_locked());

        engine.log_off();
        assert_eq!(engine.session(), Session::LoggedOff);

        engine.log_in();
        assert!(!engine.is_session_locked());
    }

    #[test]
    fn test_session_screen_drops_gesture() {
        let mut engine = create_test_engine();
        engine.pointer_down(&PointerTarget::Desktop, Vec2::new(10.0, 10.0));
        engine.pointer_move(Vec2::new(300.0, 300.0));

        engine.log_off();
        assert!(!engine.input().is_active());
        assert!(engine.desktop().selection_box().is_none());
        assert!(!engine.desktop().suppresses_next_deselect());
    }

    #[test]
    fn test_escape_ignored_behind_session_screen() {
        let mut engine = create_test_engine();
        engine.open_window("about");
        engine.log_off();

        assert!(!engine.key_down("Escape").is_handled());
        assert_eq!(engine.windows().get("about").unwrap().state(), WindowState::Open);
    }

    #[test]
    fn test_desktop_menu_action_hides_menu() {
        let mut engine = create_test_engine();
        engine.context_menu(&PointerTarget::Desktop, Vec2::new(300.0, 300.0));

        assert!(engine.desktop_menu_action(DesktopMenuAction::Refresh).is_handled());
        assert!(engine.chrome().context_menu().is_none());

        engine.context_menu(&PointerTarget::Desktop, Vec2::new(300.0, 300.0));
        assert!(engine.desktop_menu_action(DesktopMenuAction::ArrangeByName).is_handled());
        assert!(engine.chrome().context_menu().is_none());

        assert!(!engine.desktop_menu_action(DesktopMenuAction::Refresh).is_handled());
    }

    #[test]
    fn test_desktop_menu_action_needs_desktop_menu() {
        let mut engine = create_test_engine();
        engine.open_window("cmd");
        engine.context_menu(&PointerTarget::TaskbarEntry("cmd".into()), Vec2::new(10.0, 790.0));

        assert!(!engine.desktop_menu_action(DesktopMenuAction::Refresh).is_handled());
        assert_eq!(engine.windows().get("cmd").unwrap().state(), WindowState::Open);
    }

    #[test]
    fn test_scroll_hides_context_menu() {
        let mut engine = create_test_engine();
        assert!(!engine.scroll().is_handled());

        engine.context_menu(&PointerTarget::Desktop, Vec2::new(300.0, 300.0));
        assert!(engine.scroll().is_handled());
        assert!(engine.chrome().context_menu().is_none());
    }

    #[test]
    fn test_all_programs_panel() {
        let mut engine = create_test_engine();
        assert!(!engine.show_all_programs().is_handled());

        engine.click(&PointerTarget::StartButton);
        assert!(engine.show_all_programs().is_handled());
        assert!(engine.chrome().is_all_programs_open());

        engine.click(&PointerTarget::StartButton);
        assert!(!engine.chrome().is_all_programs_open());

        engine.toggle_start_menu();
        engine.show_all_programs();
        assert!(engine.hide_all_programs().is_handled());
        assert!(engine.chrome().is_start_menu_open());
    }

    #[test]
    fn test_calendar_paging() {
        let mut engine = create_test_engine();
        assert!(!engine.change_calendar_month(1).is_handled());

        engine.toggle_calendar(today());
        engine.change_calendar_month(1);
        engine.change_calendar_month(1);
        let popup = engine.chrome().calendar().unwrap();
        assert_eq!((popup.shown.year, popup.shown.month), (2025, 1));

        engine.toggle_calendar(today());
        assert!(engine.chrome().calendar().is_none());

        engine.log_off();
        engine.toggle_calendar(today());
        assert!(engine.chrome().calendar().is_none());
    }
}
