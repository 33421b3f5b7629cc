//! Shape primitives and the polymorphic render/hit-test contract.
//!
//! Each primitive renders in three steps against a [`Surface`]: stylize
//! (set paint attributes), trace (build the path), paint (fill/stroke). All
//! attribute changes happen between one `save` and one `restore`, so sibling
//! shapes never observe leaked surface state.

use crate::draw::color::CYAN;
use crate::draw::geometry::{Position, rect_points};
use crate::draw::paint::Paint;
use crate::draw::style::{CircleStyle, PathStyle, TextStyle};
use crate::surface::Surface;
use crate::util::Rect;

/// Dash pattern used for dashed strokes: 5px segment, 6px gap.
pub const DASH_PATTERN: [f64; 2] = [5.0, 6.0];

/// Stroke width of the selection overlay box.
const OVERLAY_STROKE_WIDTH: f64 = 1.0;

/// A closed polygon with optional quadratic corners.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    style: PathStyle,
}

impl Path {
    pub fn new(style: PathStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Renders the polygon. Atomic with respect to surface state: styling,
    /// tracing, and painting all happen inside one save/restore scope.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.save();
        self.stylize(surface);
        self.trace(surface);
        self.paint(surface);
        surface.restore();
    }

    fn stylize(&self, surface: &mut dyn Surface) {
        let style = &self.style;

        if let Some(shadow) = &style.shadow {
            surface.set_shadow(shadow);
        }
        if style.dashed_stroke {
            surface.set_dash(&DASH_PATTERN);
        } else {
            surface.set_dash(&[]);
        }
        surface.set_fill(&style.fill);
        surface.set_stroke(&style.stroke);
        surface.set_line_width(style.stroke_width);
        surface.set_global_alpha(style.opacity);
    }

    /// Traces the point sequence as one closed loop.
    ///
    /// A polygon needs at least 3 points; with fewer this is a no-op and the
    /// paint step finds no path to fill or stroke. Each point is reached by a
    /// straight line, or by a quadratic curve when the point carries a control
    /// position. The closing segment back to the first point is curved iff the
    /// *last* point carries a control.
    fn trace(&self, surface: &mut dyn Surface) {
        let points = &self.style.points;
        if points.len() < 3 {
            return;
        }

        surface.begin_path();
        surface.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            segment_to(surface, point.position(), point.control);
        }
        let closing_control = points[points.len() - 1].control;
        segment_to(surface, points[0].position(), closing_control);
    }

    fn paint(&self, surface: &mut dyn Surface) {
        // No path was traced, so there is nothing to paint. Issuing fill or
        // stroke here would re-paint whatever path the surface last held.
        if self.style.points.len() < 3 {
            return;
        }
        if self.style.fill.is_visible() {
            surface.fill();
        }
        if self.style.stroke.is_visible() {
            surface.stroke();
        }
    }
}

fn segment_to(surface: &mut dyn Surface, target: Position, control: Option<Position>) {
    match control {
        Some(control) => surface.quad_to(control.x, control.y, target.x, target.y),
        None => surface.line_to(target.x, target.y),
    }
}

/// A circle. Kept separate from [`Path`] because quadratic corners cannot
/// trace a true circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    style: CircleStyle,
}

impl Circle {
    pub fn new(style: CircleStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let style = &self.style;

        surface.save();
        self.stylize(surface);

        surface.begin_path();
        surface.arc(
            style.position.x,
            style.position.y,
            style.radius,
            0.0,
            2.0 * std::f64::consts::PI,
        );

        if style.stroke.is_visible() {
            surface.stroke();
        }
        if style.fill.is_visible() {
            surface.fill();
        }

        surface.restore();
    }

    fn stylize(&self, surface: &mut dyn Surface) {
        let style = &self.style;

        if let Some(shadow) = &style.shadow {
            surface.set_shadow(shadow);
        }
        surface.set_fill(&style.fill);
        surface.set_line_width(style.stroke_width);
        surface.set_stroke(&style.stroke);
    }

    /// Axis-aligned bounding square, side `2 × radius`, centered on the
    /// circle's position.
    pub fn bounds(&self) -> Rect {
        let style = &self.style;
        Rect::from_min_max(
            style.position.x - style.radius,
            style.position.y - style.radius,
            style.position.x + style.radius,
            style.position.y + style.radius,
        )
    }

    /// Returns true iff `position` lies within the bounding square, edges
    /// inclusive.
    ///
    /// Deliberately the square test, not the disk test: pointer feedback in
    /// the original behaves this way, and the overlay box matches the same
    /// region exactly.
    pub fn is_on(&self, position: Position) -> bool {
        self.bounds().contains(position)
    }

    /// Translates the circle by a relative offset.
    pub fn move_by(&mut self, delta: Position) {
        self.style.position.x += delta.x;
        self.style.position.y += delta.y;
    }

    /// Draws the dashed selection box around the circle's bounding square.
    pub fn render_selection_overlay(&self, surface: &mut dyn Surface) {
        let bounds = self.bounds();
        let overlay = Path::new(PathStyle {
            points: rect_points(bounds.x, bounds.y, bounds.width, bounds.height).to_vec(),
            stroke: Paint::Solid(CYAN),
            stroke_width: OVERLAY_STROKE_WIDTH,
            dashed_stroke: true,
            ..Default::default()
        });
        overlay.render(surface);
    }
}

/// A single run of filled text. Render-only: no stroke, no opacity, no hit
/// test.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    style: TextStyle,
}

impl Text {
    pub fn new(style: TextStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let style = &self.style;

        surface.save();

        if let Some(shadow) = &style.shadow {
            surface.set_shadow(shadow);
        }
        surface.set_font(&style.font, style.size);
        surface.set_fill(&Paint::Solid(style.color));
        surface.set_text_align(style.align);
        surface.fill_text(&style.text, style.position.x, style.position.y);

        surface.restore();
    }
}

/// A drawable shape: the tagged-variant form of the render/hit-test contract.
///
/// Every variant renders; only [`Circle`] answers hit tests and draws a
/// selection overlay today. Path and Text keep the hooks but report
/// never-hittable.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Path(Path),
    Circle(Circle),
    Text(Text),
}

impl Shape {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Path(path) => path.render(surface),
            Shape::Circle(circle) => circle.render(surface),
            Shape::Text(text) => text.render(surface),
        }
    }

    /// Whether this shape participates in hit-testing at all.
    pub fn is_hittable(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }

    /// Hit test. Non-hittable shapes always answer false.
    pub fn is_on(&self, position: Position) -> bool {
        match self {
            Shape::Circle(circle) => circle.is_on(position),
            // TODO: implement is_on and the selection overlay for Path and
            // Text; only Circle has them so far.
            Shape::Path(_) | Shape::Text(_) => false,
        }
    }

    /// Draws the selection overlay, if the shape defines one.
    pub fn render_selection_overlay(&self, surface: &mut dyn Surface) {
        if let Shape::Circle(circle) = self {
            circle.render_selection_overlay(surface);
        }
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Shape::Path(path)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}
