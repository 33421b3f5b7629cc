//! Board container: an ordered shape list plus caller-owned selection state.

use crate::draw::geometry::Position;
use crate::draw::shape::Shape;
use crate::surface::Surface;

/// Identity of a shape within one [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

/// Container for the shapes on a drawing board.
///
/// Shapes render in insertion order: later shapes paint over earlier ones
/// (painter's algorithm, no z-index sorting). The transient "selected" flag
/// lives here, next to the shape it belongs to but outside it, so shape
/// styles stay immutable-by-default.
#[derive(Debug, Clone, Default)]
pub struct Board {
    shapes: Vec<Shape>,
    selected: Vec<bool>,
}

impl Board {
    /// Creates a new empty board with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape on top of the existing ones and returns its identity.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> ShapeId {
        self.shapes.push(shape.into());
        self.selected.push(false);
        ShapeId(self.shapes.len() - 1)
    }

    /// Removes all shapes from the board.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected.clear();
    }

    /// All shapes in draw order (first = bottom layer).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    /// Mutable access for direct style replacement (e.g. moving a circle).
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.0)
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.get(id.0).copied().unwrap_or(false)
    }

    pub fn set_selected(&mut self, id: ShapeId, selected: bool) {
        if let Some(flag) = self.selected.get_mut(id.0) {
            *flag = selected;
        }
    }

    /// Updates every hittable shape's selection flag from a pointer position.
    ///
    /// Returns true if any flag changed, so callers can redraw only when the
    /// hover state actually moved on or off a shape.
    pub fn update_hover(&mut self, position: Position) -> bool {
        let mut changed = false;
        for (shape, flag) in self.shapes.iter().zip(self.selected.iter_mut()) {
            if !shape.is_hittable() {
                continue;
            }
            let hit = shape.is_on(position);
            if *flag != hit {
                *flag = hit;
                changed = true;
            }
        }
        changed
    }

    /// Renders every shape in order, drawing the selection overlay on top of
    /// each shape that is currently selected.
    pub fn render(&self, surface: &mut dyn Surface) {
        for (shape, selected) in self.shapes.iter().zip(self.selected.iter()) {
            shape.render(surface);
            if *selected {
                shape.render_selection_overlay(surface);
            }
        }
    }
}

/// Renders a slice of shapes in order on the same surface.
///
/// Order matters: later shapes paint over earlier ones.
pub fn render_all(surface: &mut dyn Surface, shapes: &[Shape]) {
    for shape in shapes {
        shape.render(surface);
    }
}
