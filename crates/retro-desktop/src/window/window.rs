//! Window struct and state

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use crate::math::Rect;

/// Stable window identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a window surface exists on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// Combined window state as seen by the rest of the shell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Closed,
    Open,
    Minimized,
    Maximized,
}

/// A window of the shell
///
/// Windows are created once from the window table and live for as long as
/// the registry does; only their visibility, maximized flag, bounds and
/// z-index change.
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Position and size while not maximized
    pub bounds: Rect,
    /// Z-index (higher = on top), zero until first raised
    pub z_index: u32,
    /// On-screen presence
    pub visibility: Visibility,
    /// Maximized flag, kept across minimize so a restore returns to it
    pub maximized: bool,
}

impl Window {
    /// Derived four-valued state
    pub fn state(&self) -> WindowState {
        match (self.visibility, self.maximized) {
            (Visibility::Closed, _) => WindowState::Closed,
            (Visibility::Minimized, _) => WindowState::Minimized,
            (Visibility::Open, true) => WindowState::Maximized,
            (Visibility::Open, false) => WindowState::Open,
        }
    }

    /// Check if the surface is on screen (open or maximized)
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: WindowId::from("notepad"),
            title: "Notepad".to_string(),
            bounds: Rect::new(100.0, 100.0, 400.0, 300.0),
            z_index: 0,
            visibility: Visibility::Closed,
            maximized: false,
        }
    }

    #[test]
    fn test_window_state_derivation() {
        let mut w = create_test_window();
        assert_eq!(w.state(), WindowState::Closed);

        w.visibility = Visibility::Open;
        assert_eq!(w.state(), WindowState::Open);

        w.maximized = true;
        assert_eq!(w.state(), WindowState::Maximized);

        w.visibility = Visibility::Minimized;
        assert_eq!(w.state(), WindowState::Minimized);
        assert!(!w.is_visible());
    }

    #[test]
    fn test_window_id_compares_with_str() {
        let id = WindowId::from("cmd-window");
        assert_eq!(id, "cmd-window");
        assert_eq!(id.as_str(), "cmd-window");
        assert_eq!(id.to_string(), "cmd-window");
    }

    #[test]
    fn test_window_id_serializes_as_string() {
        let id = WindowId::from("about-window");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"about-window\"");
    }
}
