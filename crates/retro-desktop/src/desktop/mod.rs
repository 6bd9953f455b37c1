//! Desktop icons and their selection state

mod icon;

pub use icon::{DesktopIcon, IconId};

use tracing::trace;
use crate::math::Vec2;
use crate::selection::{select_icons, SelectionBox};

/// The desktop surface: icons, selected icons and the rubber band
#[derive(Clone, Debug, Default)]
pub struct Desktop {
    icons: Vec<DesktopIcon>,
    /// Selected icon ids, in icon order
    selected: Vec<IconId>,
    /// Rubber band being dragged, if any
    selection_box: Option<SelectionBox>,
    /// Set when a rubber band ends with a selection, so the click that
    /// the browser fires right after the release does not deselect it
    suppress_next_deselect: bool,
}

impl Desktop {
    /// Create a desktop with the given icons, none selected
    pub fn new(icons: Vec<DesktopIcon>) -> Self {
        Self {
            icons,
            ..Default::default()
        }
    }

    /// All icons in layout order
    #[inline]
    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Get an icon by id
    pub fn icon(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Selected icon ids
    #[inline]
    pub fn selected(&self) -> &[IconId] {
        &self.selected
    }

    /// Check if an icon is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Current rubber band, if one is being dragged
    #[inline]
    pub fn selection_box(&self) -> Option<&SelectionBox> {
        self.selection_box.as_ref()
    }

    /// Check if the next background click will be swallowed
    #[inline]
    pub fn suppresses_next_deselect(&self) -> bool {
        self.suppress_next_deselect
    }

    /// Deselect every icon
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Make `id` the only selected icon
    pub fn select_only(&mut self, id: &str) {
        let Some(icon) = self.icon(id) else {
            trace!(icon = id, "select: unknown icon");
            return;
        };
        let id = icon.id.clone();
        self.selected.clear();
        self.selected.push(id);
    }

    /// Start a rubber band at the pointer, clearing the selection
    pub fn begin_selection(&mut self, origin: Vec2) {
        self.selection_box = Some(SelectionBox::new(origin));
        self.clear_selection();
    }

    /// Stretch the rubber band to the pointer and reselect
    pub fn update_selection(&mut self, current: Vec2) {
        let Some(selection) = self.selection_box.as_mut() else {
            return;
        };
        selection.current = current;
        self.selected = select_icons(selection.rect(), &self.icons);
    }

    /// Finish the rubber band.
    ///
    /// Returns true if it left icons selected, in which case the next
    /// background click is swallowed.
    pub fn end_selection(&mut self) -> bool {
        if self.selection_box.take().is_none() {
            return false;
        }
        let committed = !self.selected.is_empty();
        if committed {
            self.suppress_next_deselect = true;
        }
        committed
    }

    /// Drop the rubber band without arming the click suppression
    pub fn cancel_selection(&mut self) {
        self.selection_box = None;
    }

    /// Handle a click on the desktop background.
    ///
    /// Returns true if the selection was cleared, false if the click was
    /// swallowed because it ended a rubber band.
    pub fn click_background(&mut self) -> bool {
        if self.suppress_next_deselect {
            self.suppress_next_deselect = false;
            return false;
        }
        self.clear_selection();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    fn desktop() -> Desktop {
        Desktop::new(vec![
            DesktopIcon::new("my-computer", "My Computer", Rect::new(0.0, 0.0, 50.0, 50.0)),
            DesktopIcon::new("recycle-bin", "Recycle Bin", Rect::new(100.0, 100.0, 50.0, 50.0)),
        ])
    }

    #[test]
    fn test_select_only_replaces_selection() {
        let mut d = desktop();
        d.select_only("my-computer");
        d.select_only("recycle-bin");
        assert_eq!(d.selected(), &["recycle-bin".to_string()]);

        d.select_only("missing");
        assert_eq!(d.selected(), &["recycle-bin".to_string()]);
    }

    #[test]
    fn test_rubber_band_selects_and_suppresses_one_click() {
        let mut d = desktop();
        d.begin_selection(Vec2::new(0.0, 0.0));
        d.update_selection(Vec2::new(200.0, 200.0));
        assert_eq!(d.selected().len(), 2);

        assert!(d.end_selection());
        assert!(d.selection_box().is_none());

        // The click fired by the release is swallowed
        assert!(!d.click_background());
        assert_eq!(d.selected().len(), 2);

        // The next one deselects
        assert!(d.click_background());
        assert!(d.selected().is_empty());
    }

    #[test]
    fn test_empty_rubber_band_does_not_suppress() {
        let mut d = desktop();
        d.begin_selection(Vec2::new(300.0, 300.0));
        d.update_selection(Vec2::new(400.0, 400.0));
        assert!(!d.end_selection());
        assert!(!d.suppresses_next_deselect());
    }

    #[test]
    fn test_begin_clears_previous_selection() {
        let mut d = desktop();
        d.select_only("my-computer");
        d.begin_selection(Vec2::new(300.0, 300.0));
        assert!(d.selected().is_empty());
    }

    #[test]
    fn test_selection_shrinks_with_pointer() {
        let mut d = desktop();
        d.begin_selection(Vec2::new(0.0, 0.0));
        d.update_selection(Vec2::new(200.0, 200.0));
        d.update_selection(Vec2::new(60.0, 60.0));
        assert_eq!(d.selected(), &["my-computer".to_string()]);
    }

    #[test]
    fn test_update_without_band_is_noop() {
        let mut d = desktop();
        d.select_only("my-computer");
        d.update_selection(Vec2::new(200.0, 200.0));
        assert_eq!(d.selected(), &["my-computer".to_string()]);
        assert!(!d.end_selection());
    }
}
