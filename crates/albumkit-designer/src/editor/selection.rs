//! Click and shift-click selection policy.
//!
//! Selection is a set of element ids scoped to the active surface; it
//! never holds ids from another spread or the cover.

use uuid::Uuid;

use super::EditorSession;

impl EditorSession {
    /// Currently selected element ids, in selection order.
    pub fn selection(&self) -> &[Uuid] {
        &self.selection
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(&id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Replaces the selection with a single element. Absorbed when the id
    /// is not on the active surface.
    pub fn select_only(&mut self, id: Uuid) {
        if self.element_on_active_surface(id) {
            self.selection = vec![id];
        }
    }

    /// Toggles an element's selection membership (shift-click behavior).
    pub fn toggle_selected(&mut self, id: Uuid) {
        self.click_select(id, true);
    }

    /// Selects every element on the active surface.
    pub fn select_all(&mut self) {
        if let Some(spread) = self.design.surface(self.active_surface) {
            self.selection = spread.elements.iter().map(|e| e.id).collect();
        }
    }

    /// Applies the click policy from the pointer tool:
    /// shift-click toggles membership; a plain click replaces the
    /// selection with the clicked element unless it is already the sole
    /// selection, so a drag can start without reselect flicker.
    pub(crate) fn click_select(&mut self, id: Uuid, shift: bool) {
        if !self.element_on_active_surface(id) {
            return;
        }
        if shift {
            if let Some(pos) = self.selection.iter().position(|s| *s == id) {
                self.selection.remove(pos);
            } else {
                self.selection.push(id);
            }
        } else if self.selection.as_slice() != [id] {
            self.selection = vec![id];
        }
    }

    fn element_on_active_surface(&self, id: Uuid) -> bool {
        self.design
            .surface(self.active_surface)
            .is_some_and(|s| s.element(id).is_some())
    }
}
