//! Smart-layout helper: template element arrangements for a photo count.
//!
//! Deliberately simple grid proposals. An external auto-layout service
//! returns the same element model this engine already manipulates, so
//! nothing here is load-bearing beyond a sensible default.

use albumkit_core::geometry::PageRect;
use uuid::Uuid;

use crate::editor::EditorSession;
use crate::model::{Element, GlobalStyles};

/// Proposes frame rectangles for `photo_count` photos, honoring the
/// design's inter-element spacing. Returns an empty list for zero photos.
pub fn propose(photo_count: usize, styles: &GlobalStyles) -> Vec<PageRect> {
    if photo_count == 0 {
        return Vec::new();
    }
    let spacing = styles.spacing.max(0.0);
    let columns = (photo_count as f64).sqrt().ceil() as usize;
    let rows = photo_count.div_ceil(columns);

    let cell_width = (100.0 - spacing * (columns + 1) as f64) / columns as f64;
    let cell_height = (100.0 - spacing * (rows + 1) as f64) / rows as f64;

    let mut frames = Vec::with_capacity(photo_count);
    for index in 0..photo_count {
        let col = index % columns;
        let row = index / columns;
        frames.push(PageRect::new(
            spacing + col as f64 * (cell_width + spacing),
            spacing + row as f64 * (cell_height + spacing),
            cell_width,
            cell_height,
        ));
    }
    frames
}

impl EditorSession {
    /// Replaces the active surface's layout with a proposed arrangement
    /// of the given photos. Returns the new element ids.
    pub fn auto_build(&mut self, photo_ids: &[String]) -> Vec<Uuid> {
        if photo_ids.is_empty() || self.design.surface(self.active_surface).is_none() {
            return Vec::new();
        }
        let frames = propose(photo_ids.len(), &self.design.styles);
        self.snapshot();
        let surface = self.active_surface;
        let Some(spread) = self.design.surface_mut(surface) else {
            return Vec::new();
        };
        spread.elements.clear();
        let mut ids = Vec::with_capacity(photo_ids.len());
        for (z, (photo_id, frame)) in photo_ids.iter().zip(frames).enumerate() {
            let element = Element::photo(photo_id.clone(), frame, z as i32);
            ids.push(element.id);
            spread.elements.push(element);
        }
        self.design.touch();
        self.clear_selection();
        ids
    }
}
