use egui::{Key, Modifiers};

use crate::config::CanvasConfig;
use crate::event::RepaintOnChange;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::session::PaintSession;

pub struct PaintApp {
    config: CanvasConfig,
    session: PaintSession,
    renderer: Renderer,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        let mut app = Self::with_config(config);
        app.session
            .subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        app
    }

    /// Builds the app without a window, e.g. for tests.
    pub fn with_config(config: CanvasConfig) -> Self {
        let session = PaintSession::new(&config);
        let renderer = Renderer::new(session.background());
        Self {
            config,
            session,
            renderer,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn session(&self) -> &PaintSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PaintSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Ctrl+Z undoes, Ctrl+Shift+Z and Ctrl+Y redo.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (redo, undo) = ctx.input_mut(|input| {
            let redo = input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || input.consume_key(Modifiers::COMMAND, Key::Y);
            let undo = input.consume_key(Modifiers::COMMAND, Key::Z);
            (redo, undo)
        });

        if undo {
            self.session.on_undo_pressed();
        }
        if redo {
            self.session.on_redo_pressed();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
