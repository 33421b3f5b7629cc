//! Coordinate types and rectangle point generation.

/// A plain 2D coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A polygon vertex, optionally carrying a quadratic control point.
///
/// When `control` is present on a point P, the segment *arriving at* P (from
/// the previous point in the polygon) is drawn as a quadratic curve bent
/// toward the control position instead of a straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub control: Option<Position>,
}

impl Point {
    /// A straight-line vertex.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            control: None,
        }
    }

    /// A vertex reached by a quadratic curve bent toward `(cx, cy)`.
    pub fn curved(x: f64, y: f64, cx: f64, cy: f64) -> Self {
        Self {
            x,
            y,
            control: Some(Position::new(cx, cy)),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::at(x, y)
    }
}

/// Returns the four corners of an axis-aligned rectangle in clockwise order
/// starting at `(x, y)`.
///
/// The result is both literal geometry and the idiomatic way to build a
/// rectangular [`Path`](crate::draw::Path).
pub fn rect_points(x: f64, y: f64, width: f64, height: f64) -> [Point; 4] {
    [
        Point::at(x, y),
        Point::at(x + width, y),
        Point::at(x + width, y + height),
        Point::at(x, y + height),
    ]
}

/// Square shorthand for [`rect_points`].
pub fn square_points(x: f64, y: f64, side: f64) -> [Point; 4] {
    rect_points(x, y, side, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_points_are_clockwise_from_origin() {
        let points = rect_points(20.0, 22.0, 18.0, 2.0);
        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            coords,
            vec![(20.0, 22.0), (38.0, 22.0), (38.0, 24.0), (20.0, 24.0)]
        );
        assert!(points.iter().all(|p| p.control.is_none()));
    }

    #[test]
    fn rect_points_edges_are_axis_aligned() {
        let points = rect_points(-3.0, 7.0, 12.0, 5.0);
        for i in 0..4 {
            let a = points[i];
            let b = points[(i + 1) % 4];
            assert!(a.x == b.x || a.y == b.y);
        }
    }

    #[test]
    fn rect_points_signed_area_matches_dimensions() {
        let (w, h) = (18.0, 2.0);
        let points = rect_points(20.0, 22.0, w, h);

        // Shoelace formula; clockwise in a y-down coordinate system gives +w*h.
        let mut twice_area = 0.0;
        for i in 0..4 {
            let a = points[i];
            let b = points[(i + 1) % 4];
            twice_area += a.x * b.y - b.x * a.y;
        }
        assert_eq!(twice_area / 2.0, w * h);
    }

    #[test]
    fn square_points_default_height_to_width() {
        assert_eq!(square_points(1.0, 2.0, 4.0), rect_points(1.0, 2.0, 4.0, 4.0));
    }
}
