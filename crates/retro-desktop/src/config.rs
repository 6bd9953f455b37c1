//! Shell configuration
//!
//! Everything the window manager needs from its page: viewport and taskbar
//! dimensions, resize limits, and the fixed tables of windows and icons.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use crate::desktop::DesktopIcon;
use crate::error::DesktopError;
use crate::geometry::MIN_WINDOW_SIZE;
use crate::math::Size;
use crate::window::WindowConfig;

/// Default taskbar height in pixels
pub const TASKBAR_HEIGHT: f32 = 30.0;

/// Default z-index below the first raised window
pub const BASE_Z_INDEX: u32 = 100;

/// Largest accepted base z-index: half the CSS z-index range (a signed
/// 32-bit integer), leaving about a billion raises before the counter
/// leaves it.
pub const MAX_BASE_Z_INDEX: u32 = i32::MAX as u32 / 2;

/// Configuration of one shell instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// Browser viewport size
    pub viewport: Size,
    /// Height of the taskbar along the bottom edge
    pub taskbar_height: f32,
    /// Smallest size a resize may produce
    pub min_window_size: Size,
    /// Z-index below every raised window
    pub base_z_index: u32,
    /// The shell's windows, all closed at start
    pub windows: Vec<WindowConfig>,
    /// The desktop icons, in layout order
    pub icons: Vec<DesktopIcon>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1920.0, 1080.0),
            taskbar_height: TASKBAR_HEIGHT,
            min_window_size: MIN_WINDOW_SIZE,
            base_z_index: BASE_Z_INDEX,
            windows: Vec::new(),
            icons: Vec::new(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids are unique and icons only open known windows
    pub fn validate(&self) -> Result<(), DesktopError> {
        if self.viewport.is_empty() {
            return Err(DesktopError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if self.base_z_index > MAX_BASE_Z_INDEX {
            return Err(DesktopError::BaseZIndexTooLarge {
                base: self.base_z_index,
                max: MAX_BASE_Z_INDEX,
            });
        }

        let mut windows = HashSet::new();
        for window in &self.windows {
            if !windows.insert(window.id.as_str()) {
                return Err(DesktopError::DuplicateWindow(window.id.to_string()));
            }
        }

        let mut icons = HashSet::new();
        for icon in &self.icons {
            if !icons.insert(icon.id.as_str()) {
                return Err(DesktopError::DuplicateIcon(icon.id.clone()));
            }
            if let Some(target) = &icon.opens {
                if !windows.contains(target.as_str()) {
                    return Err(DesktopError::UnknownIconWindow {
                        icon: icon.id.clone(),
                        window: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert!((config.taskbar_height - 30.0).abs() < 0.001);
        assert_eq!(config.min_window_size, Size::new(200.0, 150.0));
        assert_eq!(config.base_z_index, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ShellConfig::from_json(
            r#"{
                "viewport": { "width": 1200, "height": 800 },
                "windows": [
                    { "id": "cmd", "title": "Command Prompt",
                      "bounds": { "x": 100, "y": 80, "width": 600, "height": 400 } }
                ],
                "icons": [
                    { "id": "cmd-icon", "label": "cmd.exe", "opens": "cmd",
                      "bounds": { "x": 10, "y": 10, "width": 70, "height": 70 } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.viewport, Size::new(1200.0, 800.0));
        assert!((config.taskbar_height - TASKBAR_HEIGHT).abs() < 0.001);
        assert_eq!(config.windows.len(), 1);
        assert_eq!(config.icons[0].opens.as_ref().unwrap(), "cmd");
    }

    #[test]
    fn test_rejects_duplicate_window() {
        let mut config = ShellConfig::default();
        config.windows.push(WindowConfig::new("cmd", "A", Rect::ZERO));
        config.windows.push(WindowConfig::new("cmd", "B", Rect::ZERO));
        assert!(matches!(config.validate(), Err(DesktopError::DuplicateWindow(id)) if id == "cmd"));
    }

    #[test]
    fn test_rejects_duplicate_icon() {
        let mut config = ShellConfig::default();
        config.icons.push(DesktopIcon::new("bin", "Recycle Bin", Rect::ZERO));
        config.icons.push(DesktopIcon::new("bin", "Recycle Bin", Rect::ZERO));
        assert!(matches!(config.validate(), Err(DesktopError::DuplicateIcon(_))));
    }

    #[test]
    fn test_rejects_icon_for_unknown_window() {
        let mut config = ShellConfig::default();
        config.icons.push(DesktopIcon::new("ie", "Internet Explorer", Rect::ZERO).opening("ie-window"));
        assert!(matches!(
            config.validate(),
            Err(DesktopError::UnknownIconWindow { window, .. }) if window == "ie-window"
        ));
    }

    #[test]
    fn test_rejects_empty_viewport() {
        let config = ShellConfig {
            viewport: Size::new(0.0, 800.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DesktopError::EmptyViewport { .. })));
    }

    #[test]
    fn test_rejects_base_z_index_without_headroom() {
        let config = ShellConfig::from_json(
            r#"{
                "baseZIndex": 4294967295,
                "windows": [
                    { "id": "a", "title": "A",
                      "bounds": { "x": 0, "y": 0, "width": 400, "height": 300 } }
                ]
            }"#,
        );
        assert!(matches!(config, Err(DesktopError::BaseZIndexTooLarge { base: u32::MAX, .. })));

        let config = ShellConfig {
            base_z_index: MAX_BASE_Z_INDEX,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(ShellConfig::from_json("{"), Err(DesktopError::Config(_))));
    }
}
