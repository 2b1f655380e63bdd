//! Percentage-space geometry primitives.
//!
//! Every coordinate in the engine is a percentage of the spread bounding
//! box (0–100 on both axes), never a pixel. Only the rendering layer
//! converts to device pixels, so the data model stays independent of any
//! viewport size.

use serde::{Deserialize, Serialize};

/// A point in percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &PagePoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle in percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a normalized rectangle from two opposite corners.
    /// Negative spans (dragging up/left) are handled.
    pub fn from_corners(a: PagePoint, b: PagePoint) -> Self {
        let (x, width) = if b.x < a.x {
            (b.x, a.x - b.x)
        } else {
            (a.x, b.x - a.x)
        };
        let (y, height) = if b.y < a.y {
            (b.y, a.y - b.y)
        } else {
            (a.y, b.y - a.y)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle's center point.
    pub fn center(&self) -> PagePoint {
        PagePoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, p: &PagePoint) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Whether two rectangles overlap.
    pub fn intersects(&self, other: &PageRect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
