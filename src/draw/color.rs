//! RGBA color type, predefined constants, and CSS-style parsing.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string cannot be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("malformed hex color `{0}` (expected #rgb or #rrggbb)")]
    MalformedHex(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit RGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a named color or a `#rgb`/`#rrggbb` hex string.
    pub fn parse(spec: &str) -> Result<Self, ParseColorError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError::MalformedHex(spec.to_string()));
        }
        name_to_color(spec).ok_or_else(|| ParseColorError::UnknownName(spec.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        })
        .collect::<Option<_>>()?;

    match digits.as_slice() {
        [r, g, b] => Some(Color::from_rgb8(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => {
            Some(Color::from_rgb8(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
        }
        _ => None,
    }
}

/// Maps color name strings to Color values.
///
/// Used by color parsing and the configuration system. Case-insensitive.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" | "magenta" => Some(MAGENTA),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

pub const MAGENTA: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Cyan, used by the default selection overlay stroke.
pub const CYAN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Color::parse("white").unwrap(), WHITE);
        assert_eq!(Color::parse("Cyan").unwrap(), CYAN);
        assert_eq!(Color::parse("MAGENTA").unwrap(), MAGENTA);
        assert_eq!(
            Color::parse("chartreuse"),
            Err(ParseColorError::UnknownName("chartreuse".into()))
        );
    }

    #[test]
    fn parses_hex_colors() {
        let dark = Color::parse("#212121").unwrap();
        assert!((dark.r - 33.0 / 255.0).abs() < 1e-9);
        assert_eq!(dark.r, dark.g);
        assert_eq!(dark.g, dark.b);
        assert_eq!(dark.a, 1.0);

        assert_eq!(Color::parse("#fff").unwrap(), WHITE);
        assert_eq!(Color::parse("#f00").unwrap(), RED);
        assert_eq!(
            Color::parse("#12345"),
            Err(ParseColorError::MalformedHex("#12345".into()))
        );
        assert_eq!(
            Color::parse("#zzz"),
            Err(ParseColorError::MalformedHex("#zzz".into()))
        );
    }

    #[test]
    fn empty_string_is_a_distinct_error() {
        assert_eq!(Color::parse(""), Err(ParseColorError::Empty));
        assert_eq!(Color::parse("   "), Err(ParseColorError::Empty));
    }
}
