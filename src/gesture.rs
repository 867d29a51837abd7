use egui::{Color32, Pos2};

use crate::ledger::StrokeLedger;
use crate::segment::{Segment, StrokeGroupId};
use crate::tool_state::ToolSettings;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// A drag is in progress. `anchor` is the last pointer position seen.
    Dragging { anchor: Pos2 },
}

/// Turns pointer drags into segments and owns the stroke group counter.
///
/// Every segment appended during one drag carries the same group id. The id
/// advances when the drag ends, so the next drag starts a fresh group.
#[derive(Debug, Default, Clone)]
pub struct GestureHandler {
    state: GestureState,
    next_group: StrokeGroupId,
}

impl GestureHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag at `point`, throwing away the redo history.
    ///
    /// Returns how many undone segments were discarded. A start that arrives
    /// mid-drag closes the previous drag first.
    pub fn drag_start(&mut self, point: Pos2, ledger: &mut StrokeLedger) -> usize {
        if self.is_dragging() {
            log::debug!("Drag started while dragging, closing group {}", self.next_group);
            self.drag_end();
        }
        self.state = GestureState::Dragging { anchor: point };
        ledger.begin_gesture()
    }

    /// Appends the segment `previous -> current` to the ledger.
    ///
    /// Moves outside a drag are ignored.
    pub fn drag_move(
        &mut self,
        previous: Pos2,
        current: Pos2,
        tools: &ToolSettings,
        background: Color32,
        ledger: &mut StrokeLedger,
    ) -> Option<Segment> {
        if !self.is_dragging() {
            return None;
        }

        let segment = Segment::new(
            previous,
            current,
            tools.stroke_color(background),
            tools.width(),
            self.next_group,
        );
        log::trace!("Segment {:?} -> {:?} in group {}", previous, current, self.next_group);
        ledger.append(segment);
        self.state = GestureState::Dragging { anchor: current };
        Some(segment)
    }

    /// Like [`Self::drag_move`], starting from the last position seen.
    pub fn drag_to(
        &mut self,
        current: Pos2,
        tools: &ToolSettings,
        background: Color32,
        ledger: &mut StrokeLedger,
    ) -> Option<Segment> {
        let GestureState::Dragging { anchor } = self.state else {
            return None;
        };
        self.drag_move(anchor, current, tools, background, ledger)
    }

    /// Finishes the drag and advances the group counter.
    ///
    /// Returns the id of the group that was just closed, or `None` if no drag
    /// was in progress. A drag that produced no segments still uses up its id.
    pub fn drag_end(&mut self) -> Option<StrokeGroupId> {
        if !self.is_dragging() {
            return None;
        }
        let finished = self.next_group;
        self.next_group = finished.next();
        self.state = GestureState::Idle;
        Some(finished)
    }

    /// Cancelling a drag is the same as ending it.
    pub fn drag_cancel(&mut self) -> Option<StrokeGroupId> {
        self.drag_end()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// The id the current (or next) drag stamps on its segments.
    pub fn current_group(&self) -> StrokeGroupId {
        self.next_group
    }
}
