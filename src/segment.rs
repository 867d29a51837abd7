use egui::{Color32, Pos2};
use std::fmt;

/// Identifies the stroke group (one continuous drag) a segment belongs to.
///
/// Ids only ever increase. An id is never handed out twice, even after the
/// group it named has been undone and discarded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrokeGroupId(u64);

impl StrokeGroupId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The id that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StrokeGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single straight line between two pointer samples.
///
/// Segments are immutable once built. Zero-length segments are allowed and
/// render as a dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Pos2,
    end: Pos2,
    color: Color32,
    width: f32,
    group: StrokeGroupId,
}

impl Segment {
    pub fn new(start: Pos2, end: Pos2, color: Color32, width: f32, group: StrokeGroupId) -> Self {
        Self {
            start,
            end,
            color,
            width,
            group,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn group(&self) -> StrokeGroupId {
        self.group
    }

    /// True when both end points coincide.
    pub fn is_dot(&self) -> bool {
        self.start == self.end
    }
}
