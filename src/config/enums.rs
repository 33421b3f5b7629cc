//! Configuration enum types.

use serde::{Deserialize, Serialize};

use crate::draw::color::Color;
use crate::draw::paint::Paint;

/// Color specification accepted in config files: either a color string
/// (named color or `#rrggbb` hex) or an RGB byte array like `[255, 0, 0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Name(String),
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the spec to a color, falling back to `fallback` (with a
    /// warning) when the string form cannot be parsed.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => match Color::parse(name) {
                Ok(color) => color,
                Err(err) => {
                    log::warn!("invalid color in config ({err}), using fallback");
                    fallback
                }
            },
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Resolves the spec to a paint; the empty string means no paint.
    pub fn to_paint(&self) -> Paint {
        match self {
            ColorSpec::Name(name) => Paint::parse(name),
            ColorSpec::Rgb([r, g, b]) => Paint::Solid(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn resolves_names_arrays_and_fallbacks() {
        assert_eq!(ColorSpec::Name("white".into()).to_color(BLACK), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 255, 255]).to_color(BLACK),
            Color::new(1.0, 1.0, 1.0, 1.0)
        );
        assert_eq!(ColorSpec::Name("no-such".into()).to_color(BLACK), BLACK);
        assert_eq!(ColorSpec::Name(String::new()).to_paint(), Paint::None);
    }

    #[test]
    fn deserializes_both_toml_forms() {
        #[derive(Deserialize)]
        struct Holder {
            color: ColorSpec,
        }

        let named: Holder = toml::from_str("color = \"yellow\"").unwrap();
        assert_eq!(named.color, ColorSpec::Name("yellow".into()));

        let rgb: Holder = toml::from_str("color = [33, 33, 33]").unwrap();
        assert_eq!(rgb.color, ColorSpec::Rgb([33, 33, 33]));
    }
}
