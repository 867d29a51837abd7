use egui::{Pos2, Response, Vec2};

/// Pointer events the canvas feeds into a [`crate::PaintSession`].
///
/// Positions are relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasInput {
    DragStart(Pos2),
    DragMove { from: Pos2, to: Pos2 },
    DragEnd,
    DragCancel,
}

/// Translates this frame's drag on the canvas into [`CanvasInput`]s.
///
/// Frames where the pointer did not move produce no `DragMove`.
pub fn canvas_inputs(response: &Response) -> Vec<CanvasInput> {
    let origin = response.rect.min.to_vec2();
    let mut inputs = Vec::new();

    if let Some(pos) = response.interact_pointer_pos() {
        let to = pos - origin;
        let delta = response.drag_delta();
        let from = to - delta;

        if response.drag_started() {
            inputs.push(CanvasInput::DragStart(from));
        }
        if response.dragged() && delta != Vec2::ZERO {
            inputs.push(CanvasInput::DragMove { from, to });
        }
    }

    if response.drag_stopped() {
        inputs.push(CanvasInput::DragEnd);
    }

    inputs
}
