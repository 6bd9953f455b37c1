//! Classification of what a pointer event landed on

use crate::desktop::IconId;
use crate::error::DesktopError;
use crate::geometry::ResizeDirection;
use crate::window::WindowId;

/// Element under the pointer, as classified by the page
#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget {
    /// A window's titlebar
    TitleBar(WindowId),
    /// One of a window's eight resize handles
    ResizeHandle(WindowId, ResizeDirection),
    /// Anywhere else on a window surface
    WindowBody(WindowId),
    /// The bare desktop background
    Desktop,
    /// A desktop icon
    Icon(IconId),
    /// A window's taskbar button
    TaskbarEntry(WindowId),
    /// The start button
    StartButton,
    /// Inside the open start menu
    StartMenu,
    /// Inside an open context menu
    ContextMenu,
    /// The taskbar clock
    Clock,
    /// Inside the open calendar popup
    Calendar,
    /// Anything the window manager does not track
    Other,
}

impl PointerTarget {
    /// Build a target from the kind string and ids reported by the page.
    ///
    /// Kinds: `titlebar`, `resize`, `window`, `taskbar` (need `id`; `resize`
    /// also needs `direction`), `icon` (needs `id`), `desktop`,
    /// `start-button`, `start-menu`, `context-menu`, `clock`, `calendar`,
    /// `other`.
    pub fn parse(kind: &str, id: Option<&str>, direction: Option<&str>) -> Result<Self, DesktopError> {
        let window = |kind: &'static str| {
            id.filter(|id| !id.is_empty())
                .map(WindowId::from)
                .ok_or(DesktopError::MissingWindowId(kind))
        };

        let target = match kind {
            "titlebar" => PointerTarget::TitleBar(window("titlebar")?),
            "resize" => {
                let window_id = window("resize")?;
                let direction = direction.unwrap_or_default().parse()?;
                PointerTarget::ResizeHandle(window_id, direction)
            }
            "window" => PointerTarget::WindowBody(window("window")?),
            "taskbar" => PointerTarget::TaskbarEntry(window("taskbar")?),
            "icon" => {
                let icon = id.filter(|id| !id.is_empty()).ok_or(DesktopError::MissingIconId)?;
                PointerTarget::Icon(icon.to_string())
            }
            "desktop" => PointerTarget::Desktop,
            "start-button" => PointerTarget::StartButton,
            "start-menu" => PointerTarget::StartMenu,
            "context-menu" => PointerTarget::ContextMenu,
            "clock" => PointerTarget::Clock,
            "calendar" => PointerTarget::Calendar,
            "other" => PointerTarget::Other,
            other => return Err(DesktopError::UnknownTargetKind(other.to_string())),
        };
        Ok(target)
    }

    /// Get the window this target belongs to, if any
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            PointerTarget::TitleBar(id)
            | PointerTarget::ResizeHandle(id, _)
            | PointerTarget::WindowBody(id)
            | PointerTarget::TaskbarEntry(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_targets() {
        assert_eq!(
            PointerTarget::parse("titlebar", Some("cmd"), None).unwrap(),
            PointerTarget::TitleBar("cmd".into())
        );
        assert_eq!(
            PointerTarget::parse("resize", Some("cmd"), Some("sw")).unwrap(),
            PointerTarget::ResizeHandle("cmd".into(), ResizeDirection::SW)
        );
        assert_eq!(
            PointerTarget::parse("window", Some("cmd"), None).unwrap().window_id().unwrap(),
            "cmd"
        );
    }

    #[test]
    fn test_parse_plain_targets() {
        assert_eq!(PointerTarget::parse("desktop", None, None).unwrap(), PointerTarget::Desktop);
        assert_eq!(PointerTarget::parse("icon", Some("my-computer"), None).unwrap(), PointerTarget::Icon("my-computer".into()));
        assert_eq!(PointerTarget::parse("start-button", None, None).unwrap(), PointerTarget::StartButton);
        assert_eq!(PointerTarget::parse("clock", None, None).unwrap(), PointerTarget::Clock);
        assert_eq!(PointerTarget::parse("calendar", None, None).unwrap(), PointerTarget::Calendar);
        assert_eq!(PointerTarget::parse("other", Some("ignored"), None).unwrap(), PointerTarget::Other);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PointerTarget::parse("titlebar", None, None),
            Err(DesktopError::MissingWindowId("titlebar"))
        ));
        assert!(matches!(
            PointerTarget::parse("resize", Some(""), Some("n")),
            Err(DesktopError::MissingWindowId("resize"))
        ));
        assert!(matches!(
            PointerTarget::parse("resize", Some("cmd"), None),
            Err(DesktopError::UnknownResizeDirection(_))
        ));
        assert!(matches!(
            PointerTarget::parse("icon", None, None),
            Err(DesktopError::MissingIconId)
        ));
        assert!(matches!(
            PointerTarget::parse("scrollbar", None, None),
            Err(DesktopError::UnknownTargetKind(k)) if k == "scrollbar"
        ));
    }
}
