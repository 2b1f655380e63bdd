//! Pointer-driven interaction engine.
//!
//! A single in-flight [`Interaction`] record drives all pointer-based
//! mutation: move, resize, image pan, and rubber-band box selection.
//! Every pointer-move computes its delta from the state captured at
//! interaction start, never from the previous frame's already-mutated
//! value, so rapid small events cannot compound drift.
//!
//! History granularity is the gesture: one snapshot at interaction start,
//! nothing per move. Pointer-up anywhere terminates the interaction and
//! commits whatever delta was last computed; there is deliberately no
//! Escape-cancel.

use albumkit_core::constants::{
    DEFAULT_TEXT_HEIGHT, DEFAULT_TEXT_WIDTH, IMAGE_SCALE_MAX, IMAGE_SCALE_MIN, IMAGE_SCALE_STEP,
    MIN_ELEMENT_SIZE, SNAP_THRESHOLD,
};
use albumkit_core::geometry::{PagePoint, PageRect};
use uuid::Uuid;

use crate::editor::{EditorSession, Tool};

/// One of the eight resize handles around a selected frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Handle {
    /// Whether dragging this handle moves the frame's west edge.
    fn west(self) -> bool {
        matches!(self, Handle::W | Handle::Nw | Handle::Sw)
    }

    fn east(self) -> bool {
        matches!(self, Handle::E | Handle::Ne | Handle::Se)
    }

    fn north(self) -> bool {
        matches!(self, Handle::N | Handle::Ne | Handle::Nw)
    }

    fn south(self) -> bool {
        matches!(self, Handle::S | Handle::Se | Handle::Sw)
    }
}

/// Per-element state captured at interaction start; the base for every
/// delta computation during the gesture.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElementStart {
    rect: PageRect,
    image_offset: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InteractionKind {
    Move,
    Resize(Handle),
    Pan,
    BoxSelect,
}

/// The in-flight pointer gesture.
#[derive(Debug, Clone)]
pub(crate) struct Interaction {
    kind: InteractionKind,
    start: PagePoint,
    targets: Vec<(Uuid, ElementStart)>,
}

impl EditorSession {
    /// Handles a pointer-down on the canvas.
    ///
    /// Routing is mode-exclusive: proofing clicks place or toggle comment
    /// pins; the text tool places a text element and reverts to pointer;
    /// the crop tool begins an image pan on photo elements only; the
    /// pointer tool selects and begins a move, or a rubber-band box
    /// selection when the canvas is empty under the cursor.
    pub fn pointer_down(&mut self, at: PagePoint, shift: bool) {
        if self.proofing {
            self.proofing_click(at);
            return;
        }
        match self.tool {
            Tool::Text => self.place_text_at(at),
            Tool::Crop => self.begin_pan(at),
            Tool::Pointer => {
                let hit = self
                    .design
                    .surface(self.active_surface)
                    .and_then(|s| s.hit_test(&at));
                match hit {
                    Some(id) => self.begin_move(id, at, shift),
                    None => self.begin_box_select(at, shift),
                }
            }
        }
    }

    /// Begins a handle-driven resize of the single selected element.
    /// Absorbed for multi-selections and in proofing mode.
    pub fn begin_resize(&mut self, handle: Handle, at: PagePoint) {
        if self.proofing || self.selection.len() != 1 {
            return;
        }
        let id = self.selection[0];
        let Some(start) = self.element_start(id) else {
            return;
        };
        self.snapshot();
        self.interaction = Some(Interaction {
            kind: InteractionKind::Resize(handle),
            start: at,
            targets: vec![(id, start)],
        });
        tracing::debug!(element = %id, ?handle, "resize started");
    }

    /// Advances the in-flight interaction to the current pointer position.
    pub fn pointer_move(&mut self, at: PagePoint) {
        let Some(interaction) = self.interaction.clone() else {
            return;
        };
        let dx = at.x - interaction.start.x;
        let dy = at.y - interaction.start.y;
        match interaction.kind {
            InteractionKind::Move => self.apply_move(&interaction.targets, dx, dy),
            InteractionKind::Resize(handle) => {
                self.apply_resize(&interaction.targets, handle, dx, dy)
            }
            InteractionKind::Pan => self.apply_pan(&interaction.targets, dx, dy),
            InteractionKind::BoxSelect => self.apply_box_select(interaction.start, at),
        }
    }

    /// Terminates the in-flight interaction. Called on pointer-up
    /// anywhere, including outside the canvas bounds.
    pub fn pointer_up(&mut self) {
        if self.interaction.take().is_some() {
            tracing::debug!("interaction ended");
        }
        self.snap_guides.clear();
        self.band = None;
    }

    /// Adjusts the crop zoom of the selected photo element. Positive
    /// wheel delta (scroll up) zooms in; scale is clamped to `[1, 5]`.
    /// Only live while the crop tool is active.
    pub fn wheel(&mut self, delta: f64) {
        if self.proofing || self.tool != Tool::Crop || self.selection.len() != 1 || delta == 0.0 {
            return;
        }
        let id = self.selection[0];
        let surface = self.active_surface;
        let Some(current) = self
            .design
            .surface(surface)
            .and_then(|s| s.element(id))
            .and_then(|e| e.image_transform())
            .map(|t| t.scale)
        else {
            return;
        };
        let step = if delta > 0.0 {
            IMAGE_SCALE_STEP
        } else {
            -IMAGE_SCALE_STEP
        };
        let next = (current + step).clamp(IMAGE_SCALE_MIN, IMAGE_SCALE_MAX);
        if next == current {
            return;
        }
        self.snapshot();
        if let Some(transform) = self
            .design
            .surface_mut(surface)
            .and_then(|s| s.element_mut(id))
            .and_then(|e| e.image_transform_mut())
        {
            transform.scale = next;
        }
        self.design.touch();
    }

    // Gesture starts -----------------------------------------------------

    fn place_text_at(&mut self, at: PagePoint) {
        let rect = PageRect::new(
            at.x - DEFAULT_TEXT_WIDTH / 2.0,
            at.y - DEFAULT_TEXT_HEIGHT / 2.0,
            DEFAULT_TEXT_WIDTH,
            DEFAULT_TEXT_HEIGHT,
        );
        if let Some(id) = self.add_text("", rect) {
            self.selection = vec![id];
        }
        // The text tool is one-shot.
        self.tool = Tool::Pointer;
    }

    fn begin_pan(&mut self, at: PagePoint) {
        let hit = self
            .design
            .surface(self.active_surface)
            .and_then(|s| s.hit_test(&at));
        let Some(id) = hit else {
            return;
        };
        let is_photo = self
            .design
            .surface(self.active_surface)
            .and_then(|s| s.element(id))
            .is_some_and(|e| e.is_photo());
        if !is_photo {
            // Panning a text element is meaningless; absorb the click.
            return;
        }
        self.select_only(id);
        let Some(start) = self.element_start(id) else {
            return;
        };
        self.snapshot();
        self.interaction = Some(Interaction {
            kind: InteractionKind::Pan,
            start: at,
            targets: vec![(id, start)],
        });
        tracing::debug!(element = %id, "image pan started");
    }

    fn begin_move(&mut self, id: Uuid, at: PagePoint, shift: bool) {
        self.click_select(id, shift);
        if !self.is_selected(id) {
            // Shift-click toggled the element off; nothing to drag.
            return;
        }
        let targets: Vec<(Uuid, ElementStart)> = self
            .selection
            .clone()
            .into_iter()
            .filter_map(|sid| self.element_start(sid).map(|s| (sid, s)))
            .collect();
        if targets.is_empty() {
            return;
        }
        self.snapshot();
        self.interaction = Some(Interaction {
            kind: InteractionKind::Move,
            start: at,
            targets,
        });
    }

    fn begin_box_select(&mut self, at: PagePoint, shift: bool) {
        if !shift {
            self.selection.clear();
        }
        self.band = Some(PageRect::new(at.x, at.y, 0.0, 0.0));
        self.interaction = Some(Interaction {
            kind: InteractionKind::BoxSelect,
            start: at,
            targets: Vec::new(),
        });
    }

    // Gesture updates ----------------------------------------------------

    fn apply_move(&mut self, targets: &[(Uuid, ElementStart)], dx: f64, dy: f64) {
        self.snap_guides.clear();
        let surface = self.active_surface;
        if targets.len() == 1 {
            // Snapping only applies to single-element moves; with several
            // elements there is no unambiguous reference frame.
            let (id, start) = targets[0];
            let (x, vertical) = snap_axis(start.rect.x + dx, start.rect.width);
            let (y, horizontal) = snap_axis(start.rect.y + dy, start.rect.height);
            self.snap_guides.vertical = vertical;
            self.snap_guides.horizontal = horizontal;
            if let Some(element) = self
                .design
                .surface_mut(surface)
                .and_then(|s| s.element_mut(id))
            {
                element.x = x;
                element.y = y;
            }
        } else if let Some(spread) = self.design.surface_mut(surface) {
            for (id, start) in targets {
                if let Some(element) = spread.element_mut(*id) {
                    element.x = start.rect.x + dx;
                    element.y = start.rect.y + dy;
                }
            }
        }
        self.design.touch();
    }

    fn apply_resize(&mut self, targets: &[(Uuid, ElementStart)], handle: Handle, dx: f64, dy: f64) {
        let Some((id, start)) = targets.first().copied() else {
            return;
        };
        let rect = resize_rect(start.rect, handle, dx, dy);
        let surface = self.active_surface;
        if let Some(element) = self
            .design
            .surface_mut(surface)
            .and_then(|s| s.element_mut(id))
        {
            element.set_rect(rect);
        }
        self.design.touch();
    }

    fn apply_pan(&mut self, targets: &[(Uuid, ElementStart)], dx: f64, dy: f64) {
        let Some((id, start)) = targets.first().copied() else {
            return;
        };
        let surface = self.active_surface;
        // Only the image content inside the frame shifts; the frame rect
        // itself is untouched.
        if let Some(transform) = self
            .design
            .surface_mut(surface)
            .and_then(|s| s.element_mut(id))
            .and_then(|e| e.image_transform_mut())
        {
            transform.x = start.image_offset.0 + dx;
            transform.y = start.image_offset.1 + dy;
        }
        self.design.touch();
    }

    fn apply_box_select(&mut self, start: PagePoint, at: PagePoint) {
        let band = PageRect::from_corners(start, at);
        self.band = Some(band);
        // Recomputed from scratch every move so the selection is always
        // exactly "currently intersecting", with no sticky accumulation.
        if let Some(spread) = self.design.surface(self.active_surface) {
            self.selection = spread
                .elements
                .iter()
                .filter(|e| e.rect().intersects(&band))
                .map(|e| e.id)
                .collect();
        }
    }

    fn element_start(&self, id: Uuid) -> Option<ElementStart> {
        let element = self.design.surface(self.active_surface)?.element(id)?;
        let image_offset = element
            .image_transform()
            .map_or((0.0, 0.0), |t| (t.x, t.y));
        Some(ElementStart {
            rect: element.rect(),
            image_offset,
        })
    }
}

/// Snaps a proposed edge coordinate to the canvas center or edges when
/// within the snap threshold. Returns the (possibly snapped) coordinate
/// and the guide line to display.
fn snap_axis(proposed: f64, extent: f64) -> (f64, Option<f64>) {
    // Candidate positions: leading edge at 0, centered at 50, trailing
    // edge at 100.
    let candidates = [
        (0.0, 0.0),
        (50.0 - extent / 2.0, 50.0),
        (100.0 - extent, 100.0),
    ];
    let mut best: Option<(f64, f64, f64)> = None;
    for (position, guide) in candidates {
        let distance = (proposed - position).abs();
        if distance <= SNAP_THRESHOLD && best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((position, guide, distance));
        }
    }
    match best {
        Some((position, guide, _)) => (position, Some(guide)),
        None => (proposed, None),
    }
}

/// Computes the resized frame for a handle drag. The edge opposite the
/// handle stays anchored, and width/height are floored so the frame can
/// never invert or collapse.
fn resize_rect(start: PageRect, handle: Handle, dx: f64, dy: f64) -> PageRect {
    let mut rect = start;
    if handle.east() {
        rect.width = start.width + dx;
    } else if handle.west() {
        rect.x = start.x + dx;
        rect.width = start.width - dx;
    }
    if handle.south() {
        rect.height = start.height + dy;
    } else if handle.north() {
        rect.y = start.y + dy;
        rect.height = start.height - dy;
    }
    if rect.width < MIN_ELEMENT_SIZE {
        if handle.west() {
            rect.x = start.x + start.width - MIN_ELEMENT_SIZE;
        }
        rect.width = MIN_ELEMENT_SIZE;
    }
    if rect.height < MIN_ELEMENT_SIZE {
        if handle.north() {
            rect.y = start.y + start.height - MIN_ELEMENT_SIZE;
        }
        rect.height = MIN_ELEMENT_SIZE;
    }
    rect
}
