use egui::{Painter, Rect, Shape, Stroke, Vec2};

use crate::segment::Segment;

/// Paints the canvas background and the drawn segments.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: egui::Color32,
}

impl Renderer {
    pub fn new(background: egui::Color32) -> Self {
        Self { background }
    }

    /// Fills `rect` with the background and paints `segments` in order.
    ///
    /// Segment coordinates are relative to `rect.min`.
    pub fn render(&self, painter: &Painter, rect: Rect, segments: &[Segment]) {
        painter.rect_filled(rect, 0.0, self.background);

        let offset = rect.min.to_vec2();
        let shapes: Vec<Shape> = segments
            .iter()
            .flat_map(|segment| segment_shapes(segment, offset))
            .collect();
        painter.extend(shapes);
    }

    pub fn background(&self) -> egui::Color32 {
        self.background
    }
}

/// Shapes for one segment: the line plus a disc on each end for round caps.
///
/// A zero-length segment is a single disc.
pub fn segment_shapes(segment: &Segment, offset: Vec2) -> Vec<Shape> {
    let start = segment.start() + offset;
    let end = segment.end() + offset;
    let radius = segment.width() / 2.0;
    let color = segment.color();

    if segment.is_dot() {
        return vec![Shape::circle_filled(start, radius, color)];
    }

    vec![
        Shape::line_segment([start, end], Stroke::new(segment.width(), color)),
        Shape::circle_filled(start, radius, color),
        Shape::circle_filled(end, radius, color),
    ]
}
