use egui::Color32;

use crate::config::CanvasConfig;

/// The brush settings the toolbar edits and every new segment is stamped with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    color: Color32,
    width: f32,
    eraser: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl ToolSettings {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            eraser: false,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.default_color.into(), config.default_width)
    }

    /// Picks a palette color. Picking a color also leaves eraser mode.
    pub fn select_color(&mut self, color: Color32) {
        self.color = color;
        self.eraser = false;
    }

    pub fn select_eraser(&mut self) {
        self.eraser = true;
    }

    pub fn select_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    /// The color a new segment is painted with.
    ///
    /// The eraser paints with the canvas background.
    pub fn stroke_color(&self, background: Color32) -> Color32 {
        if self.eraser { background } else { self.color }
    }
}
