//! Desktop icon definition

use serde::{Deserialize, Serialize};
use crate::math::Rect;
use crate::window::WindowId;

/// Desktop icon identifier
pub type IconId = String;

/// An icon on the desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    /// Unique identifier
    pub id: IconId,
    /// Caption under the icon
    pub label: String,
    /// Hit area in viewport pixels
    pub bounds: Rect,
    /// Window opened on double-click
    #[serde(default)]
    pub opens: Option<WindowId>,
}

impl DesktopIcon {
    /// Create an icon that opens nothing
    pub fn new(id: impl Into<IconId>, label: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            bounds,
            opens: None,
        }
    }

    /// Set the window opened on double-click
    pub fn opening(mut self, window: impl Into<WindowId>) -> Self {
        self.opens = Some(window.into());
        self
    }
}
