#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod input;
pub mod ledger;
pub mod panels;
pub mod renderer;
pub mod segment;
pub mod session;
pub mod tool_state;

pub use app::PaintApp;
pub use config::{CanvasConfig, PaletteEntry, Rgb};
pub use error::{ConfigError, ConfigResult};
pub use event::{CanvasEvent, EventBus, EventHandler};
pub use gesture::{GestureHandler, GestureState};
pub use input::CanvasInput;
pub use ledger::{GroupMove, StrokeLedger};
pub use renderer::Renderer;
pub use segment::{Segment, StrokeGroupId};
pub use session::PaintSession;
pub use tool_state::ToolSettings;
