//! Style records for the shape primitives.
//!
//! Every field has a documented default, so styles are built with struct
//! update syntax: `PathStyle { points, fill: RED.into(), ..Default::default() }`.

use serde::{Deserialize, Serialize};

use super::color::{self, Color};
use super::geometry::{Point, Position};
use super::paint::Paint;
use super::shape::Path;

/// Drop shadow attributes.
///
/// Styles carry an `Option<Shadow>`; `None` is the explicit "no shadow"
/// signal. A present shadow defaults each sub-field independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow offset from the shape, defaults to (0, 0).
    pub offset: Position,
    /// Blur radius, defaults to 0. Backends without a blur primitive render
    /// the shadow hard.
    pub blur: f64,
    /// Shadow color, defaults to black.
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: Position::default(),
            blur: 0.0,
            color: color::BLACK,
        }
    }
}

/// Horizontal text alignment relative to the anchor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Style record for [`Path`](super::Path).
///
/// Defaults: no points, no fill, no stroke, stroke width 0, opacity 1,
/// no shadow, solid stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    pub points: Vec<Point>,
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
    pub opacity: f64,
    pub shadow: Option<Shadow>,
    pub dashed_stroke: bool,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            fill: Paint::None,
            stroke: Paint::None,
            stroke_width: 0.0,
            opacity: 1.0,
            shadow: None,
            dashed_stroke: false,
        }
    }
}

/// Style record for [`Circle`](super::Circle).
///
/// Defaults: radius 3, position (0, 0), no stroke, no fill, stroke width 0,
/// no shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleStyle {
    pub radius: f64,
    pub position: Position,
    pub stroke: Paint,
    pub fill: Paint,
    pub stroke_width: f64,
    pub shadow: Option<Shadow>,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            position: Position::default(),
            stroke: Paint::None,
            fill: Paint::None,
            stroke_width: 0.0,
            shadow: None,
        }
    }
}

/// Style record for [`Text`](super::Text).
///
/// Defaults: empty text, Arial, size 20, white, centered, position (0, 0),
/// no shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub text: String,
    pub font: String,
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
    pub position: Position,
    pub shadow: Option<Shadow>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: "Arial".to_string(),
            size: 20.0,
            color: color::WHITE,
            align: TextAlign::Center,
            position: Position::default(),
            shadow: None,
        }
    }
}

/// A partial [`PathStyle`]: present fields win over the base style when
/// overlaid via [`style_group`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathStyleOverride {
    pub points: Option<Vec<Point>>,
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub shadow: Option<Shadow>,
    pub dashed_stroke: Option<bool>,
}

impl PathStyleOverride {
    /// Overlays this override on top of `base`, producing a full style.
    pub fn apply(&self, base: &PathStyle) -> PathStyle {
        PathStyle {
            points: self.points.clone().unwrap_or_else(|| base.points.clone()),
            fill: self.fill.clone().unwrap_or_else(|| base.fill.clone()),
            stroke: self.stroke.clone().unwrap_or_else(|| base.stroke.clone()),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            opacity: self.opacity.unwrap_or(base.opacity),
            shadow: self.shadow.or(base.shadow),
            dashed_stroke: self.dashed_stroke.unwrap_or(base.dashed_stroke),
        }
    }
}

/// Produces one [`Path`] per override, each sharing `base` as its common
/// style. A pure factory: the produced paths share no state afterwards.
pub fn style_group(base: &PathStyle, overrides: &[PathStyleOverride]) -> Vec<Path> {
    overrides
        .iter()
        .map(|entry| Path::new(entry.apply(base)))
        .collect()
}
