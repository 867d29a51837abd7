use crate::segment::{Segment, StrokeGroupId};

/// Result of moving one stroke group between the two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMove {
    pub group: StrokeGroupId,
    pub segments: usize,
}

/// Holds every segment of the drawing, split into what is visible and what
/// has been undone.
///
/// `drawn` is in paint order. `undone` is a stack whose top is its last
/// element. A segment lives in exactly one of the two at any time, and the
/// segments of one group are always contiguous.
#[derive(Debug, Default, Clone)]
pub struct StrokeLedger {
    drawn: Vec<Segment>,
    undone: Vec<Segment>,
}

impl StrokeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a segment on top of the drawing.
    pub fn append(&mut self, segment: Segment) {
        self.drawn.push(segment);
    }

    /// Drops everything that could still be redone.
    ///
    /// Returns how many segments were discarded.
    pub fn begin_gesture(&mut self) -> usize {
        let discarded = self.undone.len();
        self.undone.clear();
        discarded
    }

    /// Moves the most recently drawn group onto the undone stack.
    pub fn undo_last_group(&mut self) -> Option<GroupMove> {
        move_last_group(&mut self.drawn, &mut self.undone)
    }

    /// Moves the most recently undone group back onto the drawing.
    pub fn redo_last_group(&mut self) -> Option<GroupMove> {
        move_last_group(&mut self.undone, &mut self.drawn)
    }

    pub fn drawn(&self) -> &[Segment] {
        &self.drawn
    }

    pub fn undone(&self) -> &[Segment] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.drawn.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

/// Moves the trailing run of segments sharing the last segment's group from
/// `from` onto `to`, last segment first.
///
/// The run is reversed on the way, so a group that goes out and comes back
/// again ends up in its original order.
fn move_last_group(from: &mut Vec<Segment>, to: &mut Vec<Segment>) -> Option<GroupMove> {
    let group = from.last()?.group();
    let start = from
        .iter()
        .rposition(|segment| segment.group() != group)
        .map_or(0, |index| index + 1);
    let segments = from.len() - start;
    to.extend(from.drain(start..).rev());
    Some(GroupMove { group, segments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, Pos2};

    fn segment(x: f32, group: u64) -> Segment {
        Segment::new(
            Pos2::new(x, 0.0),
            Pos2::new(x + 1.0, 0.0),
            Color32::BLACK,
            2.0,
            StrokeGroupId::new(group),
        )
    }

    fn groups(segments: &[Segment]) -> Vec<u64> {
        segments.iter().map(|s| s.group().get()).collect()
    }

    #[test]
    fn undo_on_empty_ledger_is_a_no_op() {
        let mut ledger = StrokeLedger::new();
        assert_eq!(ledger.undo_last_group(), None);
        assert_eq!(ledger.redo_last_group(), None);
        assert!(ledger.drawn().is_empty());
        assert!(ledger.undone().is_empty());
    }

    #[test]
    fn undo_moves_only_the_last_group() {
        let mut ledger = StrokeLedger::new();
        for (x, group) in [(0.0, 0), (1.0, 0), (2.0, 1), (3.0, 1), (4.0, 1)] {
            ledger.append(segment(x, group));
        }

        let moved = ledger.undo_last_group();
        assert_eq!(
            moved,
            Some(GroupMove {
                group: StrokeGroupId::new(1),
                segments: 3
            })
        );
        assert_eq!(groups(ledger.drawn()), vec![0, 0]);
        assert_eq!(groups(ledger.undone()), vec![1, 1, 1]);
        // Last segment of the group is popped first.
        assert_eq!(ledger.undone()[0].start().x, 4.0);
    }

    #[test]
    fn redo_restores_original_order() {
        let mut ledger = StrokeLedger::new();
        for (x, group) in [(0.0, 0), (1.0, 0), (2.0, 0)] {
            ledger.append(segment(x, group));
        }
        let before = ledger.drawn().to_vec();

        ledger.undo_last_group();
        ledger.redo_last_group();

        assert_eq!(ledger.drawn(), before.as_slice());
        assert!(ledger.undone().is_empty());
    }

    #[test]
    fn single_segment_group_moves_one_segment() {
        let mut ledger = StrokeLedger::new();
        ledger.append(segment(0.0, 0));
        ledger.append(segment(1.0, 1));

        assert_eq!(ledger.undo_last_group().map(|m| m.segments), Some(1));
        assert_eq!(ledger.redo_last_group().map(|m| m.segments), Some(1));
        assert_eq!(groups(ledger.drawn()), vec![0, 1]);
    }

    #[test]
    fn undo_stops_at_group_boundary() {
        let mut ledger = StrokeLedger::new();
        for (x, group) in [(0.0, 0), (1.0, 1), (2.0, 1), (3.0, 2)] {
            ledger.append(segment(x, group));
        }

        ledger.undo_last_group();
        ledger.undo_last_group();
        assert_eq!(groups(ledger.drawn()), vec![0]);
        assert_eq!(groups(ledger.undone()), vec![2, 1, 1]);
        assert_eq!(ledger.undone()[1].start().x, 2.0);

        // A group that fills the whole sequence moves in one go.
        ledger.undo_last_group();
        assert!(ledger.drawn().is_empty());
        assert_eq!(ledger.redo_last_group().map(|m| m.segments), Some(1));
        assert_eq!(ledger.redo_last_group().map(|m| m.segments), Some(2));
        assert_eq!(groups(ledger.drawn()), vec![0, 1, 1]);
        assert_eq!(ledger.drawn()[1].start().x, 1.0);
    }

    #[test]
    fn begin_gesture_discards_undone() {
        let mut ledger = StrokeLedger::new();
        ledger.append(segment(0.0, 0));
        ledger.undo_last_group();
        assert!(ledger.can_redo());

        assert_eq!(ledger.begin_gesture(), 1);
        assert!(!ledger.can_redo());
        assert_eq!(ledger.begin_gesture(), 0);
    }
}
