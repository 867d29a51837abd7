use super::{CanvasEvent, EventHandler};

/// Asks egui for a new frame whenever the drawing changes
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, event: &CanvasEvent) {
        if event.changes_drawing() {
            self.ctx.request_repaint();
        }
    }
}
