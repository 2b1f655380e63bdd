//! Proofing/review mode: comment pins instead of element manipulation.

use albumkit_core::constants::COMMENT_HIT_RADIUS;
use albumkit_core::geometry::PagePoint;
use uuid::Uuid;

use super::{EditorSession, Tool};
use crate::model::Comment;

impl EditorSession {
    pub fn proofing(&self) -> bool {
        self.proofing
    }

    /// Enters or leaves proofing mode. Entering forces the pointer tool,
    /// clears the selection, and cancels any in-flight interaction; the
    /// canvas becomes a read-only view that accepts comment clicks only.
    pub fn set_proofing(&mut self, proofing: bool) {
        if self.proofing == proofing {
            return;
        }
        self.proofing = proofing;
        if proofing {
            self.tool = Tool::Pointer;
            self.selection.clear();
            self.interaction = None;
            self.snap_guides.clear();
            self.band = None;
        }
    }

    /// Name recorded as the author of newly placed comments.
    pub fn set_reviewer(&mut self, name: impl Into<String>) {
        self.reviewer = name.into();
    }

    /// Handles a proofing-mode canvas click: clicking near an existing
    /// pin toggles its resolved flag, anywhere else places a new
    /// unresolved comment. Returns the id of a newly created comment.
    pub(crate) fn proofing_click(&mut self, at: PagePoint) -> Option<Uuid> {
        let spread = self.design.surface(self.active_surface)?;
        let hit = spread
            .comments
            .iter()
            .find(|c| PagePoint::new(c.x, c.y).distance_to(&at) <= COMMENT_HIT_RADIUS)
            .map(|c| c.id);

        match hit {
            Some(id) => {
                self.toggle_comment_resolved(id);
                None
            }
            None => self.place_comment(at),
        }
    }

    /// Places a new unresolved comment pinned at the given point.
    pub fn place_comment(&mut self, at: PagePoint) -> Option<Uuid> {
        let surface = self.active_surface;
        self.design.surface(surface)?;
        self.snapshot();
        let reviewer = self.reviewer.clone();
        let spread = self.design.surface_mut(surface)?;
        let comment = Comment::new(reviewer, "", at.x, at.y);
        let id = comment.id;
        spread.comments.push(comment);
        self.design.touch();
        Some(id)
    }

    /// Toggles a comment pin between resolved and unresolved.
    pub fn toggle_comment_resolved(&mut self, id: Uuid) {
        let surface = self.active_surface;
        let known = self
            .design
            .surface(surface)
            .is_some_and(|s| s.comments.iter().any(|c| c.id == id));
        if !known {
            return;
        }
        self.snapshot();
        if let Some(spread) = self.design.surface_mut(surface) {
            if let Some(comment) = spread.comments.iter_mut().find(|c| c.id == id) {
                comment.resolved = !comment.resolved;
            }
            self.design.touch();
        }
    }

    /// Fills in the body of a comment after placement. The shell calls
    /// this once its text input closes.
    pub fn set_comment_text(&mut self, id: Uuid, text: impl Into<String>) {
        let surface = self.active_surface;
        if let Some(spread) = self.design.surface_mut(surface) {
            if let Some(comment) = spread.comments.iter_mut().find(|c| c.id == id) {
                comment.text = text.into();
                self.design.touch();
            }
        }
    }
}
