//! The drawing session: the one place toolbar and canvas events land.
//!
//! A [`PaintSession`] owns the [`StrokeLedger`], the [`GestureHandler`] and the
//! current [`ToolSettings`]. Everything runs on the UI thread, one event at a
//! time. Hosts with more than one window should keep a single session behind
//! one owner and forward events to it rather than share the ledger.
//!
//! ```rust
//! use egui::Pos2;
//! use stroke_canvas::PaintSession;
//!
//! let mut session = PaintSession::default();
//! session.on_drag_start(Pos2::new(0.0, 0.0));
//! session.on_drag_move(Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0));
//! session.on_drag_end();
//! assert_eq!(session.drawn_segments().len(), 1);
//!
//! session.on_undo_pressed();
//! assert!(session.drawn_segments().is_empty());
//! ```

use egui::{Color32, Pos2};

use crate::config::CanvasConfig;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::gesture::GestureHandler;
use crate::input::CanvasInput;
use crate::ledger::StrokeLedger;
use crate::segment::Segment;
use crate::tool_state::ToolSettings;

#[derive(Debug)]
pub struct PaintSession {
    ledger: StrokeLedger,
    gesture: GestureHandler,
    tools: ToolSettings,
    background: Color32,
    events: EventBus,
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl PaintSession {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            ledger: StrokeLedger::new(),
            gesture: GestureHandler::new(),
            tools: ToolSettings::from_config(config),
            background: config.background.into(),
            events: EventBus::new(),
        }
    }

    /// Registers a handler for change notifications.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn on_tool_color_selected(&mut self, color: Color32) {
        self.tools.select_color(color);
        log::info!("Brush color set to {:?}", color);
        self.events.emit(CanvasEvent::ToolChanged(self.tools));
    }

    pub fn on_eraser_selected(&mut self) {
        self.tools.select_eraser();
        log::info!("Eraser selected");
        self.events.emit(CanvasEvent::ToolChanged(self.tools));
    }

    pub fn on_width_selected(&mut self, width: f32) {
        self.tools.select_width(width);
        log::debug!("Brush width set to {width:.1}");
        self.events.emit(CanvasEvent::ToolChanged(self.tools));
    }

    pub fn on_drag_start(&mut self, point: Pos2) {
        let discarded = self.gesture.drag_start(point, &mut self.ledger);
        log::debug!("Stroke {} started at {:?}", self.gesture.current_group(), point);
        if discarded > 0 {
            log::debug!("Discarded {discarded} undone segments");
            self.events.emit(CanvasEvent::RedoDiscarded { segments: discarded });
        }
    }

    pub fn on_drag_move(&mut self, previous: Pos2, current: Pos2) {
        let appended = self.gesture.drag_move(
            previous,
            current,
            &self.tools,
            self.background,
            &mut self.ledger,
        );
        if let Some(segment) = appended {
            self.events.emit(CanvasEvent::SegmentAppended {
                group: segment.group(),
            });
        }
    }

    pub fn on_drag_end(&mut self) {
        if let Some(group) = self.gesture.drag_end() {
            log::debug!("Stroke {group} completed");
            self.events.emit(CanvasEvent::StrokeCompleted { group });
        }
    }

    pub fn on_drag_cancel(&mut self) {
        if let Some(group) = self.gesture.drag_cancel() {
            log::debug!("Stroke {group} cancelled");
            self.events.emit(CanvasEvent::StrokeCompleted { group });
        }
    }

    pub fn on_undo_pressed(&mut self) {
        match self.ledger.undo_last_group() {
            Some(moved) => {
                log::debug!("Undid stroke {} ({} segments)", moved.group, moved.segments);
                self.events.emit(CanvasEvent::GroupUndone {
                    group: moved.group,
                    segments: moved.segments,
                });
            }
            None => log::debug!("Nothing to undo"),
        }
    }

    pub fn on_redo_pressed(&mut self) {
        match self.ledger.redo_last_group() {
            Some(moved) => {
                log::debug!("Redid stroke {} ({} segments)", moved.group, moved.segments);
                self.events.emit(CanvasEvent::GroupRedone {
                    group: moved.group,
                    segments: moved.segments,
                });
            }
            None => log::debug!("Nothing to redo"),
        }
    }

    pub fn handle_input(&mut self, input: CanvasInput) {
        match input {
            CanvasInput::DragStart(point) => self.on_drag_start(point),
            CanvasInput::DragMove { from, to } => self.on_drag_move(from, to),
            CanvasInput::DragEnd => self.on_drag_end(),
            CanvasInput::DragCancel => self.on_drag_cancel(),
        }
    }

    /// Segments currently on the canvas, in paint order.
    pub fn drawn_segments(&self) -> &[Segment] {
        self.ledger.drawn()
    }

    pub fn ledger(&self) -> &StrokeLedger {
        &self.ledger
    }

    pub fn gesture(&self) -> &GestureHandler {
        &self.gesture
    }

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn can_undo(&self) -> bool {
        self.ledger.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.ledger.can_redo()
    }
}
