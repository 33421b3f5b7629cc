//! Configuration file support.
//!
//! Settings are loaded from `~/.config/vectorboard/config.toml`: board canvas
//! size and background, drawing defaults, and text defaults. If no config
//! file exists, the built-in defaults are used.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{BoardConfig, DrawingConfig, TextConfig};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure, deserialized from the TOML file.
///
/// Every field defaults individually, so a partial config file is fine.
///
/// # Example TOML
/// ```toml
/// [board]
/// width = 300
/// height = 400
/// background = "white"
///
/// [drawing]
/// default_stroke_width = 3.0
/// default_opacity = 1.0
///
/// [text]
/// font_family = "Arial"
/// size = 20.0
/// color = "white"
/// align = "center"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Board canvas settings
    #[serde(default)]
    pub board: BoardConfig,

    /// Drawing tool defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Text defaults
    #[serde(default)]
    pub text: TextConfig,
}

impl Config {
    /// Loads the configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates the configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Default config file location, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vectorboard").join("config.toml"))
    }

    /// Clamps out-of-range values to acceptable ranges, warning about each.
    ///
    /// Bad values never abort a load; they degrade to the nearest valid
    /// value so a render is always possible.
    fn validate_and_clamp(&mut self) {
        if !(1..=8192).contains(&self.board.width) {
            log::warn!(
                "invalid board width {}, clamping to 1-8192 range",
                self.board.width
            );
            self.board.width = self.board.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.board.height) {
            log::warn!(
                "invalid board height {}, clamping to 1-8192 range",
                self.board.height
            );
            self.board.height = self.board.height.clamp(1, 8192);
        }

        if !(0.0..=50.0).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "invalid default_stroke_width {:.1}, clamping to 0.0-50.0 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width = self.drawing.default_stroke_width.clamp(0.0, 50.0);
        }

        if !(0.0..=1.0).contains(&self.drawing.default_opacity) {
            log::warn!(
                "invalid default_opacity {:.2}, clamping to 0.0-1.0 range",
                self.drawing.default_opacity
            );
            self.drawing.default_opacity = self.drawing.default_opacity.clamp(0.0, 1.0);
        }

        if !(4.0..=200.0).contains(&self.text.size) {
            log::warn!(
                "invalid text size {:.1}, clamping to 4.0-200.0 range",
                self.text.size
            );
            self.text.size = self.text.size.clamp(4.0, 200.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::style::TextAlign;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_match_the_original_board() {
        let config = Config::default();
        assert_eq!(config.board.width, 300);
        assert_eq!(config.board.height, 400);
        assert_eq!(config.board.background, ColorSpec::Name("white".into()));
        assert_eq!(config.drawing.default_stroke_width, 3.0);
        assert_eq!(config.drawing.default_opacity, 1.0);
        assert_eq!(config.text.font_family, "Arial");
        assert_eq!(config.text.size, 20.0);
        assert_eq!(config.text.align, TextAlign::Center);
    }

    #[test]
    fn partial_files_keep_defaults_for_missing_fields() {
        let file = write_config(
            r#"
            [board]
            width = 800

            [text]
            align = "right"
            "#,
        );
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.board.width, 800);
        assert_eq!(config.board.height, 400);
        assert_eq!(config.text.align, TextAlign::Right);
        assert_eq!(config.text.size, 20.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let file = write_config(
            r#"
            [drawing]
            default_stroke_width = 120.0
            default_opacity = 1.8

            [text]
            size = 1.0
            "#,
        );
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.drawing.default_stroke_width, 50.0);
        assert_eq!(config.drawing.default_opacity, 1.0);
        assert_eq!(config.text.size, 4.0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = write_config("board = \"not a table\"");
        assert!(Config::load_from_path(file.path()).is_err());
    }
}
