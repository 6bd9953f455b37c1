//! Start menu, context menus, calendar popup and session screens

use std::str::FromStr;

use serde::Serialize;
use crate::calendar::{CalendarDate, CalendarMonth};
use crate::error::DesktopError;
use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// Size of the desktop background context menu
pub const DESKTOP_MENU_SIZE: Size = Size::new(180.0, 320.0);

/// Size of the taskbar button context menu
pub const TASKBAR_MENU_SIZE: Size = Size::new(150.0, 100.0);

/// Gap kept between a shifted menu and the screen edge
const MENU_MARGIN: f32 = 5.0;

/// An open context menu
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContextMenu {
    /// Right-click on the desktop background
    Desktop { position: Vec2 },
    /// Right-click on a taskbar button
    #[serde(rename_all = "camelCase")]
    Taskbar { position: Vec2, window_id: WindowId },
}

impl ContextMenu {
    /// Top-left corner of the menu
    pub fn position(&self) -> Vec2 {
        match self {
            ContextMenu::Desktop { position } | ContextMenu::Taskbar { position, .. } => *position,
        }
    }
}

/// Entries of the taskbar button context menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskbarAction {
    /// Show the window un-maximized and raise it
    Restore,
    Minimize,
    /// Show the window maximized and raise it
    Maximize,
    Close,
}

impl FromStr for TaskbarAction {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restore" => Ok(TaskbarAction::Restore),
            "minimize" => Ok(TaskbarAction::Minimize),
            "maximize" => Ok(TaskbarAction::Maximize),
            "close" => Ok(TaskbarAction::Close),
            other => Err(DesktopError::UnknownTaskbarAction(other.to_string())),
        }
    }
}

/// Entries of the desktop background context menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DesktopMenuAction {
    Refresh,
    ArrangeByName,
}

impl FromStr for DesktopMenuAction {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refresh" => Ok(DesktopMenuAction::Refresh),
            "arrange-by-name" => Ok(DesktopMenuAction::ArrangeByName),
            other => Err(DesktopError::UnknownDesktopMenuAction(other.to_string())),
        }
    }
}

/// Full-screen session state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Session {
    /// Desktop, taskbar and windows on screen
    #[default]
    Active,
    /// Login screen covering everything
    LoggedOff,
    /// Shutdown screen covering everything
    ShuttingDown,
}

impl Session {
    /// Check if a session screen hides the desktop
    #[inline]
    pub fn is_locked(self) -> bool {
        self != Session::Active
    }
}

/// Open calendar popup: the month on show and the date it was opened on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarPopup {
    pub shown: CalendarMonth,
    pub today: CalendarDate,
}

/// Place the desktop context menu at the pointer, shifted to stay on screen
pub fn desktop_menu_position(pointer: Vec2, viewport: Size, taskbar_height: f32) -> Vec2 {
    let mut pos = pointer;
    if pos.x + DESKTOP_MENU_SIZE.width > viewport.width {
        pos.x = viewport.width - DESKTOP_MENU_SIZE.width - MENU_MARGIN;
    }
    if pos.y + DESKTOP_MENU_SIZE.height > viewport.height - taskbar_height {
        pos.y = viewport.height - DESKTOP_MENU_SIZE.height - taskbar_height - MENU_MARGIN;
    }
    pos
}

/// Place the taskbar context menu just above the taskbar
pub fn taskbar_menu_position(pointer: Vec2, viewport: Size, taskbar_height: f32) -> Vec2 {
    let x = if pointer.x + TASKBAR_MENU_SIZE.width > viewport.width {
        viewport.width - TASKBAR_MENU_SIZE.width - MENU_MARGIN
    } else {
        pointer.x
    };
    Vec2::new(x, viewport.height - taskbar_height - TASKBAR_MENU_SIZE.height)
}

/// Open/closed state of the start menu, its All Programs panel, the context
/// menus, the calendar popup and the session screens
#[derive(Clone, Debug, Default)]
pub struct ShellChrome {
    start_menu_open: bool,
    all_programs_open: bool,
    context_menu: Option<ContextMenu>,
    calendar: Option<CalendarPopup>,
    session: Session,
}

impl ShellChrome {
    /// Create with every menu closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the start menu is showing
    #[inline]
    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// Open the start menu if closed, close it if open.
    ///
    /// Either way the All Programs panel starts out hidden.
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
        self.all_programs_open = false;
    }

    /// Close the start menu. Returns true if it was open.
    pub fn close_start_menu(&mut self) -> bool {
        self.all_programs_open = false;
        std::mem::replace(&mut self.start_menu_open, false)
    }

    /// Check if the All Programs panel is showing
    #[inline]
    pub fn is_all_programs_open(&self) -> bool {
        self.all_programs_open
    }

    /// Show the All Programs panel. Only possible while the start menu is open.
    pub fn show_all_programs(&mut self) -> bool {
        if !self.start_menu_open {
            return false;
        }
        !std::mem::replace(&mut self.all_programs_open, true)
    }

    /// Hide the All Programs panel. Returns true if it was showing.
    pub fn hide_all_programs(&mut self) -> bool {
        std::mem::replace(&mut self.all_programs_open, false)
    }

    /// Currently open context menu
    #[inline]
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    /// Show the desktop context menu
    pub fn show_desktop_menu(&mut self, pointer: Vec2, viewport: Size, taskbar_height: f32) {
        self.context_menu = Some(ContextMenu::Desktop {
            position: desktop_menu_position(pointer, viewport, taskbar_height),
        });
    }

    /// Show the taskbar context menu for a window
    pub fn show_taskbar_menu(&mut self, window_id: WindowId, pointer: Vec2, viewport: Size, taskbar_height: f32) {
        self.context_menu = Some(ContextMenu::Taskbar {
            position: taskbar_menu_position(pointer, viewport, taskbar_height),
            window_id,
        });
    }

    /// Hide any context menu, handing back the one that was open
    pub fn hide_context_menu(&mut self) -> Option<ContextMenu> {
        self.context_menu.take()
    }

    /// Open calendar popup, if any
    #[inline]
    pub fn calendar(&self) -> Option<&CalendarPopup> {
        self.calendar.as_ref()
    }

    /// Open the calendar on today's month, or close it if open
    pub fn toggle_calendar(&mut self, today: CalendarDate) {
        self.calendar = match self.calendar {
            Some(_) => None,
            None => Some(CalendarPopup {
                shown: today.month_view(),
                today,
            }),
        };
    }

    /// Page the open calendar by `delta` months. Returns false if closed.
    pub fn change_calendar_month(&mut self, delta: i32) -> bool {
        match self.calendar.as_mut() {
            Some(popup) => {
                popup.shown = popup.shown.shifted(delta);
                true
            }
            None => false,
        }
    }

    /// Close the calendar. Returns true if it was open.
    pub fn close_calendar(&mut self) -> bool {
        self.calendar.take().is_some()
    }

    /// Current session screen
    #[inline]
    pub fn session(&self) -> Session {
        self.session
    }

    /// Switch session screen, closing every popup.
    ///
    /// Returns false if the session was already in that state.
    pub fn set_session(&mut self, session: Session) -> bool {
        self.close_start_menu();
        self.hide_context_menu();
        self.close_calendar();
        std::mem::replace(&mut self.session, session) != session
    }
}
