//! Clipboard and keyboard shortcut handling.
//!
//! Copies are element snapshots by value, never id references, so a
//! pasted element carries no back-reference to its source. Suppressing
//! shortcuts while a text input has focus is the embedding shell's
//! concern, not the engine's.

use albumkit_core::constants::{NUDGE_STEP, NUDGE_STEP_LARGE, PASTE_OFFSET};
use uuid::Uuid;

use super::{EditorSession, Tool};

/// Direction of an arrow-key nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Semantic keyboard shortcuts the engine responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToolPointer,
    ToolCrop,
    ToolText,
    Undo,
    Redo,
    Copy,
    Paste,
    Delete,
    SelectAll,
    ToggleGrid,
    /// Arrow nudge; `true` means the large-step modifier was held.
    Nudge(NudgeDirection, bool),
}

impl EditorSession {
    /// Copies the selected elements to the clipboard by value.
    pub fn copy(&mut self) {
        let Some(spread) = self.design.surface(self.active_surface) else {
            return;
        };
        self.clipboard = self
            .selection
            .iter()
            .filter_map(|id| spread.element(*id))
            .cloned()
            .collect();
    }

    /// Pastes the clipboard onto the active surface with fresh ids and a
    /// fixed positional offset, then selects the pasted elements.
    /// A no-op when the clipboard is empty or no surface is active.
    /// Returns the new ids.
    pub fn paste(&mut self) -> Vec<Uuid> {
        if self.clipboard.is_empty() || self.design.surface(self.active_surface).is_none() {
            return Vec::new();
        }
        self.snapshot();

        let surface = self.active_surface;
        let clipboard = self.clipboard.clone();
        let Some(spread) = self.design.surface_mut(surface) else {
            return Vec::new();
        };

        let mut z = spread.next_z();
        let mut new_ids = Vec::with_capacity(clipboard.len());
        for source in clipboard {
            let mut element = source;
            element.id = Uuid::new_v4();
            element.x += PASTE_OFFSET;
            element.y += PASTE_OFFSET;
            element.z = z;
            z += 1;
            new_ids.push(element.id);
            spread.elements.push(element);
        }
        self.design.touch();
        self.selection = new_ids.clone();
        new_ids
    }

    /// Removes all selected elements from the active surface.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.snapshot();
        let surface = self.active_surface;
        let selection = std::mem::take(&mut self.selection);
        if let Some(spread) = self.design.surface_mut(surface) {
            spread.elements.retain(|e| !selection.contains(&e.id));
            self.design.touch();
        }
    }

    /// Moves the whole selection by one nudge step.
    pub fn nudge(&mut self, direction: NudgeDirection, large: bool) {
        if self.selection.is_empty() {
            return;
        }
        let step = if large { NUDGE_STEP_LARGE } else { NUDGE_STEP };
        let (dx, dy) = match direction {
            NudgeDirection::Left => (-step, 0.0),
            NudgeDirection::Right => (step, 0.0),
            NudgeDirection::Up => (0.0, -step),
            NudgeDirection::Down => (0.0, step),
        };
        self.snapshot();
        let surface = self.active_surface;
        let selection = self.selection.clone();
        if let Some(spread) = self.design.surface_mut(surface) {
            for id in selection {
                if let Some(element) = spread.element_mut(id) {
                    element.x += dx;
                    element.y += dy;
                }
            }
            self.design.touch();
        }
    }

    /// Routes a keyboard shortcut. In proofing mode only undo/redo and
    /// the grid toggle remain live; everything that would mutate the
    /// layout is absorbed.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        if self.proofing
            && !matches!(
                shortcut,
                Shortcut::Undo | Shortcut::Redo | Shortcut::ToggleGrid
            )
        {
            return;
        }
        match shortcut {
            Shortcut::ToolPointer => self.set_tool(Tool::Pointer),
            Shortcut::ToolCrop => self.set_tool(Tool::Crop),
            Shortcut::ToolText => self.set_tool(Tool::Text),
            Shortcut::Undo => {
                self.undo();
            }
            Shortcut::Redo => {
                self.redo();
            }
            Shortcut::Copy => self.copy(),
            Shortcut::Paste => {
                self.paste();
            }
            Shortcut::Delete => self.delete_selected(),
            Shortcut::SelectAll => self.select_all(),
            Shortcut::ToggleGrid => self.toggle_grid(),
            Shortcut::Nudge(direction, large) => self.nudge(direction, large),
        }
    }
}
