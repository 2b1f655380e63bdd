//! Spread/cover management and element creation for the editor session.

use albumkit_core::constants::DEFAULT_PHOTO_SIZE;
use albumkit_core::geometry::{PagePoint, PageRect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EditorSession;
use crate::model::{Background, Element, SurfaceId};

/// Typed payload accepted from an external drag-and-drop source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropPayload {
    /// Payload kind; only `"photo"` is accepted.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl EditorSession {
    /// Appends a new empty spread, makes it active, and returns its id.
    pub fn add_spread(&mut self) -> Uuid {
        self.snapshot();
        let id = self.design.add_spread();
        self.set_active_surface(SurfaceId::Spread(id));
        id
    }

    /// Deletes a spread after the caller has obtained confirmation.
    /// A no-op when the spread is the last one remaining. When the active
    /// spread is deleted, the first remaining spread becomes active.
    pub fn delete_spread(&mut self, id: Uuid) -> bool {
        if self.design.spreads.len() <= 1 || self.design.spread(id).is_none() {
            return false;
        }
        self.snapshot();
        self.design.delete_spread(id);
        if self.active_surface == SurfaceId::Spread(id) {
            self.active_surface = SurfaceId::Spread(self.design.spreads[0].id);
            self.selection.clear();
        }
        true
    }

    /// Adds a photo element to the active surface, stacked above all
    /// existing elements, and returns its id.
    pub fn add_photo(&mut self, photo_id: impl Into<String>, rect: PageRect) -> Option<Uuid> {
        let surface = self.active_surface;
        self.design.surface(surface)?;
        self.snapshot();
        let spread = self.design.surface_mut(surface)?;
        let element = Element::photo(photo_id, rect, spread.next_z());
        let id = element.id;
        spread.elements.push(element);
        self.design.touch();
        Some(id)
    }

    /// Adds a text element to the active surface and returns its id.
    pub fn add_text(&mut self, content: impl Into<String>, rect: PageRect) -> Option<Uuid> {
        let surface = self.active_surface;
        self.design.surface(surface)?;
        self.snapshot();
        let spread = self.design.surface_mut(surface)?;
        let element = Element::text(content, rect, spread.next_z());
        let id = element.id;
        spread.elements.push(element);
        self.design.touch();
        Some(id)
    }

    /// Accepts an external drag-and-drop payload at the drop point.
    /// Non-photo payloads are absorbed. The new element lands at the
    /// default size centered on the drop point and becomes the selection.
    pub fn drop_payload(&mut self, payload: &DropPayload, at: PagePoint) -> Option<Uuid> {
        if payload.kind != "photo" {
            tracing::warn!(kind = %payload.kind, "ignoring unsupported drop payload");
            return None;
        }
        let rect = PageRect::new(
            at.x - DEFAULT_PHOTO_SIZE / 2.0,
            at.y - DEFAULT_PHOTO_SIZE / 2.0,
            DEFAULT_PHOTO_SIZE,
            DEFAULT_PHOTO_SIZE,
        );
        let id = self.add_photo(payload.id.clone(), rect)?;
        self.selection = vec![id];
        Some(id)
    }

    /// Sets the active surface's background.
    pub fn set_background(&mut self, background: Background) {
        let surface = self.active_surface;
        if self.design.surface(surface).is_none() {
            return;
        }
        self.snapshot();
        if let Some(spread) = self.design.surface_mut(surface) {
            spread.background = background;
            self.design.touch();
        }
    }
}
