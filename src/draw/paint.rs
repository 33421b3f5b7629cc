//! Paint sources: solid colors, gradients, and the explicit "paint nothing"
//! variant.
//!
//! The primitives never consult color strings directly; an aspect that should
//! not be painted carries [`Paint::None`], and the matching `fill`/`stroke`
//! surface call is simply not issued.

use super::color::Color;
use super::geometry::Position;

/// What to paint an aspect (fill or stroke) of a shape with.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Paint {
    /// Do not paint this aspect at all.
    #[default]
    None,
    /// A single solid color.
    Solid(Color),
    /// A linear or radial gradient.
    Gradient(Gradient),
}

impl Paint {
    /// Returns true if this paint produces any output when applied.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Paint::None)
    }

    /// Interprets a CSS-style color string as a paint.
    ///
    /// The empty string means "paint nothing". An unparsable color also
    /// degrades to [`Paint::None`] with a warning rather than failing; bad
    /// input produces an empty render, never an error.
    pub fn parse(spec: &str) -> Paint {
        if spec.trim().is_empty() {
            return Paint::None;
        }
        match Color::parse(spec) {
            Ok(color) => Paint::Solid(color),
            Err(err) => {
                log::warn!("ignoring unusable paint spec: {err}");
                Paint::None
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Paint::Gradient(gradient)
    }
}

/// A single gradient color stop at `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// One end of a gradient, with every field optional.
///
/// Missing end-anchor coordinates default to the corresponding start-anchor
/// coordinate; missing start coordinates default to zero. A gradient is radial
/// iff *both* anchors carry a radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientAnchor {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: Option<f64>,
}

impl GradientAnchor {
    /// A point anchor (linear gradients).
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            radius: None,
        }
    }

    /// A circle anchor (radial gradients).
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            radius: Some(radius),
        }
    }
}

/// A resolved gradient descriptor, usable wherever a [`Paint`] is accepted.
///
/// Backends translate this into their native gradient sources at paint time.
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        from: Position,
        to: Position,
        stops: Vec<GradientStop>,
    },
    Radial {
        from: Position,
        from_radius: f64,
        to: Position,
        to_radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

/// Builds a gradient between two anchors.
///
/// If both `start` and `end` carry a radius the result is a radial gradient
/// between the two circles, otherwise a linear gradient between the two
/// points. Color stops are applied in the given order. An empty stop list is
/// valid and yields a colorless (invisible) gradient.
pub fn make_gradient(
    start: GradientAnchor,
    end: GradientAnchor,
    stops: Vec<GradientStop>,
) -> Gradient {
    let from = Position::new(start.x.unwrap_or(0.0), start.y.unwrap_or(0.0));
    let to = Position::new(end.x.unwrap_or(from.x), end.y.unwrap_or(from.y));

    match (start.radius, end.radius) {
        (Some(from_radius), Some(to_radius)) => Gradient::Radial {
            from,
            from_radius,
            to,
            to_radius,
            stops,
        },
        _ => Gradient::Linear { from, to, stops },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, MAGENTA, RED};

    #[test]
    fn parse_maps_empty_and_bad_specs_to_none() {
        assert_eq!(Paint::parse(""), Paint::None);
        assert_eq!(Paint::parse("not-a-color"), Paint::None);
        assert_eq!(Paint::parse("red"), Paint::Solid(RED));
        assert!(!Paint::None.is_visible());
        assert!(Paint::parse("#212121").is_visible());
    }

    #[test]
    fn gradient_is_linear_unless_both_anchors_have_radii() {
        let stops = vec![GradientStop::new(0.0, MAGENTA), GradientStop::new(1.0, RED)];

        let linear = make_gradient(
            GradientAnchor::point(0.0, 0.0),
            GradientAnchor::circle(170.0, 0.0, 20.0),
            stops.clone(),
        );
        assert!(matches!(linear, Gradient::Linear { .. }));

        let radial = make_gradient(
            GradientAnchor::circle(0.0, 0.0, 5.0),
            GradientAnchor::circle(0.0, 0.0, 50.0),
            stops,
        );
        match radial {
            Gradient::Radial {
                from_radius,
                to_radius,
                ..
            } => {
                assert_eq!(from_radius, 5.0);
                assert_eq!(to_radius, 50.0);
            }
            other => panic!("expected radial gradient, got {other:?}"),
        }
    }

    #[test]
    fn missing_end_coordinates_default_to_start() {
        let gradient = make_gradient(
            GradientAnchor::point(10.0, 20.0),
            GradientAnchor {
                x: Some(170.0),
                y: None,
                radius: None,
            },
            vec![GradientStop::new(0.5, BLUE)],
        );
        match gradient {
            Gradient::Linear { from, to, stops } => {
                assert_eq!(from, Position::new(10.0, 20.0));
                assert_eq!(to, Position::new(170.0, 20.0));
                assert_eq!(stops.len(), 1);
            }
            other => panic!("expected linear gradient, got {other:?}"),
        }
    }

    #[test]
    fn empty_stop_list_is_a_valid_gradient() {
        let gradient = make_gradient(
            GradientAnchor::point(0.0, 0.0),
            GradientAnchor::point(1.0, 1.0),
            Vec::new(),
        );
        assert!(gradient.stops().is_empty());
        assert!(Paint::from(gradient).is_visible());
    }
}
