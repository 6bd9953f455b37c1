//! Taskbar projection of the window registry
//!
//! The taskbar holds no state of its own. Renderers call
//! [`taskbar_entries`] whenever [`WindowRegistry::generation`] moves.

use serde::Serialize;
use crate::window::{WindowId, WindowRegistry};

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub is_active: bool,
}

/// Derive the taskbar buttons in first-open order.
///
/// Minimized windows keep their button; only closing removes it.
pub fn taskbar_entries(registry: &WindowRegistry) -> Vec<TaskbarEntry> {
    registry
        .open_list()
        .iter()
        .filter_map(|id| registry.get(id.as_str()))
        .map(|window| TaskbarEntry {
            window_id: window.id.clone(),
            title: window.title.clone(),
            is_active: registry.is_active(window.id.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;
    use crate::window::WindowConfig;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(
            vec![
                WindowConfig::new("about", "About Me", Rect::new(0.0, 0.0, 400.0, 300.0)),
                WindowConfig::new("cmd", "Command Prompt", Rect::new(0.0, 0.0, 400.0, 300.0)),
                WindowConfig::new("ie", "Internet Explorer", Rect::new(0.0, 0.0, 400.0, 300.0)),
            ],
            100,
        )
    }

    fn titles(entries: &[TaskbarEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_empty_taskbar() {
        assert!(taskbar_entries(&registry()).is_empty());
    }

    #[test]
    fn test_entries_follow_first_open_order() {
        let mut wm = registry();
        wm.open("ie");
        wm.open("about");
        wm.open("cmd");
        wm.focus("ie");

        let entries = taskbar_entries(&wm);
        assert_eq!(titles(&entries), vec!["Internet Explorer", "About Me", "Command Prompt"]);
        assert!(entries[0].is_active);
        assert!(!entries[1].is_active);
        assert!(!entries[2].is_active);
    }

    #[test]
    fn test_reopen_does_not_duplicate() {
        let mut wm = registry();
        wm.open("about");
        wm.open("cmd");
        wm.open("about");
        wm.open("about");

        let entries = taskbar_entries(&wm);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_active);
    }

    #[test]
    fn test_minimized_window_keeps_entry() {
        let mut wm = registry();
        wm.open("about");
        wm.open("cmd");
        wm.minimize("cmd");
        wm.focus("about");

        let entries = taskbar_entries(&wm);
        assert_eq!(titles(&entries), vec!["About Me", "Command Prompt"]);
        assert!(entries[0].is_active);
        assert!(!entries[1].is_active);
    }

    #[test]
    fn test_close_removes_entry_and_leaves_none_active() {
        let mut wm = registry();
        wm.open("about");
        wm.open("cmd");
        wm.close("cmd");

        let entries = taskbar_entries(&wm);
        assert_eq!(titles(&entries), vec!["About Me"]);
        assert!(entries.iter().all(|e| !e.is_active));
    }

    #[test]
    fn test_at_most_one_active() {
        let mut wm = registry();
        for id in ["about", "cmd", "ie", "cmd", "about"] {
            wm.open(id);
            let active = taskbar_entries(&wm).iter().filter(|e| e.is_active).count();
            assert_eq!(active, 1);
        }
    }
}
