//! Engine tuning constants.
//!
//! All linear values are expressed in percent of the spread bounding box
//! (0–100), the engine's native coordinate space.

/// Minimum element width/height during a live resize. Frames can never
/// invert or collapse below this.
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Distance within which a single-element move locks onto a snap target.
pub const SNAP_THRESHOLD: f64 = 1.5;

/// Offset applied to pasted elements on both axes so copies never stack
/// exactly on their originals.
pub const PASTE_OFFSET: f64 = 2.0;

/// Arrow-key nudge step.
pub const NUDGE_STEP: f64 = 0.5;

/// Arrow-key nudge step with the modifier key held.
pub const NUDGE_STEP_LARGE: f64 = 5.0;

/// Image crop zoom range inside a photo frame.
pub const IMAGE_SCALE_MIN: f64 = 1.0;
pub const IMAGE_SCALE_MAX: f64 = 5.0;

/// Scale change applied per wheel step while the crop tool is active.
pub const IMAGE_SCALE_STEP: f64 = 0.25;

/// Default edge length of a photo element created by drag-and-drop.
pub const DEFAULT_PHOTO_SIZE: f64 = 30.0;

/// Default size of a text element placed with the text tool.
pub const DEFAULT_TEXT_WIDTH: f64 = 24.0;
pub const DEFAULT_TEXT_HEIGHT: f64 = 8.0;

/// Hit radius around a comment pin in proofing mode.
pub const COMMENT_HIT_RADIUS: f64 = 2.0;

/// Sentinel order index for the cover surface, outside the normal
/// spread sequence.
pub const COVER_ORDER: i32 = -1;
