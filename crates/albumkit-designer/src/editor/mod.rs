//! Editor session for UI integration.
//! Owns the design being edited plus all transient editor state: tool
//! mode, selection, clipboard, undo/redo stacks, and the in-flight
//! pointer interaction.
//!
//! This module is split into submodules:
//! - `spreads`: spread/cover management and element creation
//! - `selection`: click and shift-click selection policy
//! - `clipboard`: copy/paste, nudge, delete, keyboard shortcuts
//! - `proofing`: review-mode comment pins
//!
//! The pointer state machine itself lives in [`crate::interaction`].

mod clipboard;
mod proofing;
mod selection;
mod spreads;

pub use clipboard::{NudgeDirection, Shortcut};
pub use spreads::DropPayload;

use albumkit_core::geometry::PageRect;
use uuid::Uuid;

use crate::history::History;
use crate::interaction::Interaction;
use crate::model::{Design, Element, SurfaceId};

/// Editing tools.
///
/// `Pointer` selects/moves/resizes frames, `Crop` pans and zooms image
/// content inside a photo frame, `Text` places a new text element and
/// then reverts to `Pointer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pointer,
    Crop,
    Text,
}

/// Guide-line coordinates exposed while a single-element move is locked
/// onto a snap target. The renderer draws a line at each set axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapGuides {
    /// X coordinate of a vertical guide line, in percent.
    pub vertical: Option<f64>,
    /// Y coordinate of a horizontal guide line, in percent.
    pub horizontal: Option<f64>,
}

impl SnapGuides {
    pub fn clear(&mut self) {
        self.vertical = None;
        self.horizontal = None;
    }
}

/// One editing session over a single design document.
///
/// All editor state is held here explicitly rather than in globals, so
/// concurrent sessions (and tests) are trivially isolated.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub(crate) design: Design,
    pub(crate) history: History,
    pub(crate) tool: Tool,
    pub(crate) active_surface: SurfaceId,
    pub(crate) selection: Vec<Uuid>,
    pub(crate) clipboard: Vec<Element>,
    pub(crate) interaction: Option<Interaction>,
    pub(crate) snap_guides: SnapGuides,
    pub(crate) band: Option<PageRect>,
    pub(crate) proofing: bool,
    pub(crate) show_grid: bool,
    pub(crate) reviewer: String,
}

impl EditorSession {
    /// Opens a session on the given design. The first spread becomes the
    /// active surface and the initial state is not a history entry.
    pub fn new(design: Design) -> Self {
        let active_surface = SurfaceId::Spread(design.spreads[0].id);
        Self {
            design,
            history: History::new(),
            tool: Tool::Pointer,
            active_surface,
            selection: Vec::new(),
            clipboard: Vec::new(),
            interaction: None,
            snap_guides: SnapGuides::default(),
            band: None,
            proofing: false,
            show_grid: false,
            reviewer: "Reviewer".to_string(),
        }
    }

    /// Replaces the design being edited. History never spans across
    /// distinct designs, so both stacks reset along with all transient
    /// editor state.
    pub fn open(&mut self, design: Design) {
        self.active_surface = SurfaceId::Spread(design.spreads[0].id);
        self.design = design;
        self.history.clear();
        self.selection.clear();
        self.interaction = None;
        self.snap_guides.clear();
        self.band = None;
        self.proofing = false;
        self.tool = Tool::Pointer;
    }

    /// The current document value, suitable for a collaborator to persist.
    pub fn design(&self) -> &Design {
        &self.design
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Activates a tool. Activating the already-active tool returns to
    /// `Pointer`; proofing mode pins the tool to `Pointer`.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.proofing {
            return;
        }
        self.tool = if self.tool == tool { Tool::Pointer } else { tool };
    }

    pub fn active_surface(&self) -> SurfaceId {
        self.active_surface
    }

    /// Switches the active spread or cover. Selection is scoped to one
    /// surface, so it clears on every switch. Unknown surfaces are
    /// absorbed.
    pub fn set_active_surface(&mut self, surface: SurfaceId) {
        if self.design.surface(surface).is_none() {
            tracing::warn!(?surface, "set_active_surface: unknown surface");
            return;
        }
        if surface != self.active_surface {
            self.active_surface = surface;
            self.selection.clear();
            self.interaction = None;
        }
    }

    /// Switches to the cover, creating it lazily on first request.
    pub fn open_cover(&mut self) {
        let surface = self.design.ensure_cover();
        self.set_active_surface(surface);
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Current snap guide lines, if a move is locked onto a target.
    pub fn snap_guides(&self) -> SnapGuides {
        self.snap_guides
    }

    /// The rubber-band rectangle of an in-flight box selection.
    pub fn band(&self) -> Option<PageRect> {
        self.band
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undoes the most recent recorded operation. A no-op while a pointer
    /// gesture is in flight or when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        let undone = self.history.undo(&mut self.design);
        if undone {
            self.after_history_jump();
        }
        undone
    }

    /// Mirror of [`EditorSession::undo`].
    pub fn redo(&mut self) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        let redone = self.history.redo(&mut self.design);
        if redone {
            self.after_history_jump();
        }
        redone
    }

    /// Restoring a snapshot can remove the selected elements or even the
    /// active surface; re-validate both against the restored document.
    fn after_history_jump(&mut self) {
        if self.design.surface(self.active_surface).is_none() {
            self.active_surface = SurfaceId::Spread(self.design.spreads[0].id);
        }
        let surface = self.design.surface(self.active_surface);
        self.selection
            .retain(|id| surface.is_some_and(|s| s.element(*id).is_some()));
    }

    /// Records the pre-change document. Internal helper called once per
    /// mutating operation or gesture start.
    pub(crate) fn snapshot(&mut self) {
        self.history.record(&self.design);
    }
}
