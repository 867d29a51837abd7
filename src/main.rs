#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use stroke_canvas::{CanvasConfig, PaintApp};

/// Environment variable naming an optional JSON config file.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "STROKE_CANVAS_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = CanvasConfig::load_or_default(config_path.as_deref());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stroke Canvas")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "stroke_canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}

// Only the native build has a window host.
#[cfg(target_arch = "wasm32")]
fn main() {}
