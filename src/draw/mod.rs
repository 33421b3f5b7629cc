//! Shape primitives and the immediate-mode scene layer.
//!
//! This module defines the core drawing types of the crate:
//! - [`Color`] / [`Paint`]: solid colors, gradients, and the explicit
//!   "paint nothing" variant
//! - [`PathStyle`] / [`CircleStyle`] / [`TextStyle`]: defaulted style records
//! - [`Path`] / [`Circle`] / [`Text`]: the shape primitives, wrapped by the
//!   [`Shape`] capability enum
//! - [`Board`]: ordered shape list with caller-owned selection state
//! - geometry and grouping helpers ([`rect_points`], [`style_group`],
//!   [`make_gradient`], [`render_all`])

pub mod board;
pub mod color;
pub mod geometry;
pub mod paint;
pub mod shape;
pub mod style;


// Re-export commonly used types at module level
pub use board::{Board, ShapeId, render_all};
pub use color::Color;
pub use geometry::{Point, Position, rect_points, square_points};
pub use paint::{Gradient, GradientAnchor, GradientStop, Paint, make_gradient};
pub use shape::{Circle, Path, Shape, Text};
pub use style::{
    CircleStyle, PathStyle, PathStyleOverride, Shadow, TextAlign, TextStyle, style_group,
};

// Re-export color constants for the public API
pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, ORANGE, RED, TRANSPARENT, WHITE, YELLOW};
