//! Canvas configuration.
//!
//! Settings are read from a JSON file. Every field is optional and falls back
//! to the defaults below, so `{}` is a valid config.
//!
//! ```json
//! {
//!     "background": [255, 255, 255],
//!     "default_color": [0, 0, 0],
//!     "default_width": 7.5,
//!     "min_width": 1.0,
//!     "max_width": 32.5,
//!     "palette": [
//!         { "name": "Black", "color": [0, 0, 0] },
//!         { "name": "Red", "color": [255, 0, 0] }
//!     ]
//! }
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// An opaque color written as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.0;
        Color32::from_rgb(r, g, b)
    }
}

impl From<Color32> for Rgb {
    fn from(color: Color32) -> Self {
        Self([color.r(), color.g(), color.b()])
    }
}

/// One swatch in the toolbar palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Rgb,
}

impl PaletteEntry {
    fn new(name: &str, color: Rgb) -> Self {
        Self {
            name: name.to_owned(),
            color,
        }
    }
}

fn default_palette() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry::new("Black", Rgb::new(0, 0, 0)),
        PaletteEntry::new("Blue", Rgb::new(0, 0, 255)),
        PaletteEntry::new("Green", Rgb::new(0, 255, 0)),
        PaletteEntry::new("Yellow", Rgb::new(255, 255, 0)),
        PaletteEntry::new("Red", Rgb::new(255, 0, 0)),
        PaletteEntry::new("Gray", Rgb::new(136, 136, 136)),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas fill, also what the eraser paints with
    pub background: Rgb,
    /// Brush color at startup
    pub default_color: Rgb,
    /// Brush width at startup
    pub default_width: f32,
    /// Lower bound of the width slider
    pub min_width: f32,
    /// Upper bound of the width slider
    pub max_width: f32,
    pub palette: Vec<PaletteEntry>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Rgb::new(255, 255, 255),
            default_color: Rgb::new(0, 0, 0),
            default_width: 7.5,
            min_width: 1.0,
            max_width: 32.5,
            palette: default_palette(),
        }
    }
}

impl CanvasConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded canvas config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a config from JSON text.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Loads `path` if one is given, falling back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::debug!("No canvas config given, using defaults");
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Repairs values the toolbar cannot work with, logging each repair.
    pub fn validate_and_clamp(&mut self) {
        let defaults = Self::default();

        if !(self.min_width > 0.0 && self.min_width.is_finite()) {
            log::warn!("Invalid min_width {:.1}, using {:.1}", self.min_width, defaults.min_width);
            self.min_width = defaults.min_width;
        }

        if !(self.max_width >= self.min_width && self.max_width.is_finite()) {
            log::warn!(
                "Invalid max_width {:.1} (min_width is {:.1}), using {:.1}",
                self.max_width,
                self.min_width,
                defaults.max_width.max(self.min_width)
            );
            self.max_width = defaults.max_width.max(self.min_width);
        }

        if !(self.min_width..=self.max_width).contains(&self.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {:.1}-{:.1} range",
                self.default_width,
                self.min_width,
                self.max_width
            );
            self.default_width = if self.default_width.is_nan() {
                self.min_width
            } else {
                self.default_width.clamp(self.min_width, self.max_width)
            };
        }

        if self.palette.is_empty() {
            log::warn!("Empty palette, using the default palette");
            self.palette = defaults.palette;
        }
    }

    pub fn width_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min_width..=self.max_width
    }
}
