//! Pointer input mapping.
//!
//! Pointer events arrive in global (screen/client) coordinates; hit-testing
//! works in surface-local coordinates. The only bridge needed is the
//! surface's on-screen origin.

use crate::draw::geometry::Position;
use crate::util::Rect;

/// Source of a drawing surface's on-screen bounding-rectangle origin.
pub trait BoundsProvider {
    fn origin(&self) -> Position;
}

impl BoundsProvider for Rect {
    fn origin(&self) -> Position {
        Rect::origin(self)
    }
}

impl BoundsProvider for Position {
    fn origin(&self) -> Position {
        *self
    }
}

/// Maps a global pointer coordinate to surface-local coordinates by
/// subtracting the surface's bounding-rectangle origin.
pub fn to_local_position(pointer: Position, bounds: &dyn BoundsProvider) -> Position {
    let origin = bounds.origin();
    Position {
        x: pointer.x - origin.x,
        y: pointer.y - origin.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_the_surface_origin() {
        let bounds = Rect::new(100.0, 50.0, 300.0, 400.0);
        let local = to_local_position(Position::new(130.0, 70.0), &bounds);
        assert_eq!(local, Position::new(30.0, 20.0));
    }

    #[test]
    fn origin_at_zero_is_identity() {
        let pointer = Position::new(12.5, -3.0);
        assert_eq!(to_local_position(pointer, &Position::default()), pointer);
    }
}
