//! Geometry utilities shared across the crate.

use crate::draw::geometry::Position;

/// Axis-aligned rectangle with floating-point bounds.
///
/// Used for shape bounding boxes and hit-testing regions. Containment is
/// inclusive on all four edges, which is what the bounding-square hit test
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width/height are expected to be non-negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from min/max bounds.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Top-left corner of the rectangle.
    pub fn origin(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns true if `position` lies inside the rectangle, edges included.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x <= self.x + self.width
            && position.y >= self.y
            && position.y <= self.y + self.height
    }
}
