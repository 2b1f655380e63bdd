//! Document model for the spread-layout engine.
//!
//! A [`Design`] is the full album document: an ordered list of spreads, an
//! optional cover, global style defaults, and the print page spec. All
//! element geometry is stored in percent of the spread bounding box (0–100)
//! so the model stays independent of any render viewport.

use albumkit_core::constants::{COVER_ORDER, MIN_ELEMENT_SIZE};
use albumkit_core::geometry::PageRect;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Page dimensions and print tolerances for the whole design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page width in print units (mm).
    pub width: f64,
    /// Page height in print units (mm).
    pub height: f64,
    /// Bleed margin outside the trim line.
    pub bleed: f64,
    /// Safe zone inset inside the trim line.
    pub safe_zone: f64,
    /// Print resolution.
    pub dpi: u32,
}

impl Default for PageSpec {
    fn default() -> Self {
        // 30x30cm album page at print resolution.
        Self {
            width: 300.0,
            height: 300.0,
            bleed: 3.0,
            safe_zone: 5.0,
            dpi: 300,
        }
    }
}

/// Design-wide style defaults applied when an element has no override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStyles {
    pub font_family: String,
    /// Default inter-element spacing, in percent.
    pub spacing: f64,
    pub background_color: String,
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            font_family: "Georgia".to_string(),
            spacing: 2.0,
            background_color: "#ffffff".to_string(),
        }
    }
}

/// Lifecycle status of a design or spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    #[default]
    Draft,
    Final,
}

/// Spread background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Background {
    Color { value: String },
    Photo { photo_id: String },
}

impl Default for Background {
    fn default() -> Self {
        Background::Color {
            value: "#ffffff".to_string(),
        }
    }
}

/// Pan/zoom state of image content inside a photo frame, independent of
/// the frame's own position and size. Offsets are raw render-space units
/// the renderer interprets; scale is clamped to `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

/// Visual style overrides common to photo and text elements.
/// Every field is optional; `None` falls back to the design defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<bool>,
}

/// Typography overrides for text elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Image filter percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Filters {
    pub grayscale: f64,
    pub sepia: f64,
}

/// The type-specific payload of an element. The image transform lives on
/// the photo variant only, so a text element can never carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Photo {
        /// Opaque reference into the photo catalog, never pixel data.
        photo_id: String,
        #[serde(default)]
        transform: ImageTransform,
    },
    Text {
        content: String,
        #[serde(default, rename = "text_style")]
        style: TextStyle,
    },
}

/// A positioned photo or text box on a spread or cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: Uuid,
    /// Position and size in percent of the spread bounding box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Paint/selection order; higher wins, ties broken by insertion order.
    pub z: i32,
    #[serde(default)]
    pub style: ElementStyle,
    #[serde(default)]
    pub filters: Filters,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Creates a photo element with a default image transform.
    pub fn photo(photo_id: impl Into<String>, rect: PageRect, z: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: rect.x,
            y: rect.y,
            width: rect.width.max(MIN_ELEMENT_SIZE),
            height: rect.height.max(MIN_ELEMENT_SIZE),
            rotation: 0.0,
            z,
            style: ElementStyle::default(),
            filters: Filters::default(),
            kind: ElementKind::Photo {
                photo_id: photo_id.into(),
                transform: ImageTransform::default(),
            },
        }
    }

    /// Creates a text element.
    pub fn text(content: impl Into<String>, rect: PageRect, z: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: rect.x,
            y: rect.y,
            width: rect.width.max(MIN_ELEMENT_SIZE),
            height: rect.height.max(MIN_ELEMENT_SIZE),
            rotation: 0.0,
            z,
            style: ElementStyle::default(),
            filters: Filters::default(),
            kind: ElementKind::Text {
                content: content.into(),
                style: TextStyle::default(),
            },
        }
    }

    /// The element's frame rectangle.
    pub fn rect(&self) -> PageRect {
        PageRect::new(self.x, self.y, self.width, self.height)
    }

    /// Replaces the frame rectangle, flooring width/height so the frame
    /// can never invert or collapse.
    pub fn set_rect(&mut self, rect: PageRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width.max(MIN_ELEMENT_SIZE);
        self.height = rect.height.max(MIN_ELEMENT_SIZE);
    }

    pub fn is_photo(&self) -> bool {
        matches!(self.kind, ElementKind::Photo { .. })
    }

    /// The image transform of a photo element. `None` for text.
    pub fn image_transform(&self) -> Option<&ImageTransform> {
        match &self.kind {
            ElementKind::Photo { transform, .. } => Some(transform),
            ElementKind::Text { .. } => None,
        }
    }

    pub fn image_transform_mut(&mut self) -> Option<&mut ImageTransform> {
        match &mut self.kind {
            ElementKind::Photo { transform, .. } => Some(transform),
            ElementKind::Text { .. } => None,
        }
    }
}

/// A positioned review comment pinned to a spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub resolved: bool,
    /// Pin position in percent, same space as elements.
    pub x: f64,
    pub y: f64,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            text: text.into(),
            created_at: Utc::now(),
            resolved: false,
            x,
            y,
        }
    }
}

/// One two-page layout surface. The cover shares this shape with the
/// sentinel order [`COVER_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub id: Uuid,
    pub order: i32,
    pub elements: Vec<Element>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub status: DesignStatus,
}

impl Spread {
    /// Creates an empty spread at the given order index.
    pub fn new(order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            elements: Vec::new(),
            comments: Vec::new(),
            background: Background::default(),
            status: DesignStatus::Draft,
        }
    }

    /// Creates the cover surface.
    pub fn cover() -> Self {
        Self::new(COVER_ORDER)
    }

    pub fn element(&self, id: Uuid) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: Uuid) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// The next z-index that paints above every existing element.
    pub fn next_z(&self) -> i32 {
        self.elements.iter().map(|e| e.z).max().map_or(0, |z| z + 1)
    }

    /// Element ids in paint order: ascending z, ties by insertion order.
    pub fn paint_order(&self) -> Vec<Uuid> {
        let mut indexed: Vec<(usize, &Element)> = self.elements.iter().enumerate().collect();
        indexed.sort_by_key(|(i, e)| (e.z, *i));
        indexed.into_iter().map(|(_, e)| e.id).collect()
    }

    /// The topmost element whose frame contains the point, if any.
    pub fn hit_test(&self, p: &albumkit_core::PagePoint) -> Option<Uuid> {
        self.paint_order()
            .into_iter()
            .rev()
            .find(|id| self.element(*id).is_some_and(|e| e.rect().contains(p)))
    }
}

/// Identifies the surface being edited: a spread by id, or the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceId {
    Spread(Uuid),
    Cover,
}

/// The full album layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: Uuid,
    pub name: String,
    pub spec: PageSpec,
    pub spreads: Vec<Spread>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Spread>,
    #[serde(default)]
    pub styles: GlobalStyles,
    #[serde(default)]
    pub status: DesignStatus,
    pub modified_at: DateTime<Utc>,
}

impl Design {
    /// Creates a new design seeded with one empty spread. This initial
    /// state is not a history entry.
    pub fn new(name: impl Into<String>, spec: PageSpec) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            spec,
            spreads: vec![Spread::new(0)],
            cover: None,
            styles: GlobalStyles::default(),
            status: DesignStatus::Draft,
            modified_at: Utc::now(),
        }
    }

    /// Appends a new empty spread and returns its id.
    pub fn add_spread(&mut self) -> Uuid {
        let spread = Spread::new(self.spreads.len() as i32);
        let id = spread.id;
        self.spreads.push(spread);
        self.touch();
        id
    }

    /// Deletes a spread. A no-op returning `false` when the spread is the
    /// last one remaining or the id is unknown; the confirmation step is
    /// the caller's concern.
    pub fn delete_spread(&mut self, id: Uuid) -> bool {
        if self.spreads.len() <= 1 {
            return false;
        }
        let Some(index) = self.spreads.iter().position(|s| s.id == id) else {
            tracing::warn!(%id, "delete_spread: unknown spread id");
            return false;
        };
        self.spreads.remove(index);
        for (i, spread) in self.spreads.iter_mut().enumerate() {
            spread.order = i as i32;
        }
        self.touch();
        true
    }

    /// Lazily creates the cover the first time cover-view is requested,
    /// and returns its surface id.
    pub fn ensure_cover(&mut self) -> SurfaceId {
        if self.cover.is_none() {
            self.cover = Some(Spread::cover());
            self.touch();
        }
        SurfaceId::Cover
    }

    pub fn spread(&self, id: Uuid) -> Option<&Spread> {
        self.spreads.iter().find(|s| s.id == id)
    }

    /// Resolves a surface id to its spread.
    pub fn surface(&self, surface: SurfaceId) -> Option<&Spread> {
        match surface {
            SurfaceId::Spread(id) => self.spread(id),
            SurfaceId::Cover => self.cover.as_ref(),
        }
    }

    pub fn surface_mut(&mut self, surface: SurfaceId) -> Option<&mut Spread> {
        match surface {
            SurfaceId::Spread(id) => self.spreads.iter_mut().find(|s| s.id == id),
            SurfaceId::Cover => self.cover.as_mut(),
        }
    }

    /// Updates the last-modified timestamp.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
