//! Window definition used to build the registry

use serde::{Deserialize, Serialize};
use crate::math::Rect;
use super::WindowId;

/// One entry of the shell's fixed window table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Stable identifier (the window element's id in the page)
    pub id: WindowId,
    /// Titlebar and taskbar text
    pub title: String,
    /// Initial bounds in viewport pixels
    pub bounds: Rect,
}

impl WindowConfig {
    /// Create a window definition
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            bounds,
        }
    }
}
