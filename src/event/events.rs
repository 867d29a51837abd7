use crate::segment::StrokeGroupId;
use crate::tool_state::ToolSettings;

/// Change notifications raised by a [`crate::PaintSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A segment was added to the drawing.
    SegmentAppended { group: StrokeGroupId },
    /// A new drag threw away segments that could still have been redone.
    RedoDiscarded { segments: usize },
    /// A drag finished and its group was closed.
    StrokeCompleted { group: StrokeGroupId },
    GroupUndone {
        group: StrokeGroupId,
        segments: usize,
    },
    GroupRedone {
        group: StrokeGroupId,
        segments: usize,
    },
    ToolChanged(ToolSettings),
}

impl CanvasEvent {
    /// Whether the event changes what the canvas shows.
    pub fn changes_drawing(&self) -> bool {
        matches!(
            self,
            Self::SegmentAppended { .. } | Self::GroupUndone { .. } | Self::GroupRedone { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_drawing_changes_request_repaint() {
        let group = StrokeGroupId::default();
        let drawing = [
            CanvasEvent::SegmentAppended { group },
            CanvasEvent::GroupUndone { group, segments: 2 },
            CanvasEvent::GroupRedone { group, segments: 2 },
        ];
        let other = [
            CanvasEvent::RedoDiscarded { segments: 3 },
            CanvasEvent::StrokeCompleted { group },
            CanvasEvent::ToolChanged(ToolSettings::default()),
        ];

        assert!(drawing.iter().all(CanvasEvent::changes_drawing));
        assert!(!other.iter().any(CanvasEvent::changes_drawing));
    }
}
