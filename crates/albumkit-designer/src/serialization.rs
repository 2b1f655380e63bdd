//! Document (de)serialization at the engine boundary.
//!
//! Persistence mechanics live outside the engine; this module only turns
//! an externally supplied JSON value into a trusted [`Design`] and back.
//! Loaded documents are sanitized here so the rest of the engine can rely
//! on its invariants (size floor, clamped image scale, stable z-order).

use albumkit_core::constants::{IMAGE_SCALE_MAX, IMAGE_SCALE_MIN, MIN_ELEMENT_SIZE};
use albumkit_core::error::{DesignError, Result};

use crate::model::{Design, ElementKind, Spread};

impl Design {
    /// Parses a design document from JSON, sanitizing it on the way in.
    pub fn from_json(json: &str) -> Result<Design> {
        let mut design: Design =
            serde_json::from_str(json).map_err(|e| DesignError::InvalidDocument {
                reason: e.to_string(),
            })?;
        design.sanitize();
        Ok(design)
    }

    /// Serializes the design for an external collaborator to persist.
    pub fn to_json(&self) -> String {
        // The model contains no map keys or non-string tags that could
        // fail serialization.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Repairs out-of-range values in an externally produced document.
    /// A design that was only mutated through the engine is already clean.
    pub fn sanitize(&mut self) {
        if self.spreads.is_empty() {
            tracing::warn!(design = %self.id, "loaded design had no spreads, seeding one");
            self.spreads.push(Spread::new(0));
        }
        for (i, spread) in self.spreads.iter_mut().enumerate() {
            spread.order = i as i32;
            sanitize_spread(spread);
        }
        if let Some(cover) = self.cover.as_mut() {
            cover.order = albumkit_core::constants::COVER_ORDER;
            sanitize_spread(cover);
        }
    }
}

fn sanitize_spread(spread: &mut Spread) {
    for element in &mut spread.elements {
        if element.width < MIN_ELEMENT_SIZE || element.height < MIN_ELEMENT_SIZE {
            tracing::warn!(element = %element.id, "clamping degenerate element frame");
            element.width = element.width.max(MIN_ELEMENT_SIZE);
            element.height = element.height.max(MIN_ELEMENT_SIZE);
        }
        if let ElementKind::Photo { transform, .. } = &mut element.kind {
            transform.scale = transform.scale.clamp(IMAGE_SCALE_MIN, IMAGE_SCALE_MAX);
        }
    }
}
