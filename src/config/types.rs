//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use super::enums::ColorSpec;
use crate::draw::style::TextAlign;

/// Board canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Board height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color painted before the shapes
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing tool defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke width in pixels (valid range: 0.0 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: f64,

    /// Default opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_stroke_width: default_stroke_width(),
            default_opacity: default_opacity(),
        }
    }
}

/// Text defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Font family name (e.g. "Arial", "Sans")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in pixels (valid range: 4.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub size: f64,

    /// Text color
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,

    /// Horizontal alignment: "left", "center", or "right"
    #[serde(default)]
    pub align: TextAlign,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            size: default_font_size(),
            color: default_text_color(),
            align: TextAlign::default(),
        }
    }
}

fn default_width() -> u32 {
    300
}

fn default_height() -> u32 {
    400
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f64 {
    20.0
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
