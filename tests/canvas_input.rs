use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Sense, Vec2};
use stroke_canvas::input::canvas_inputs;
use stroke_canvas::{CanvasInput, PaintSession};

// Runs one egui frame with `events` over a full-screen canvas and returns the
// translated inputs plus the canvas origin
fn run_frame(ctx: &egui::Context, events: Vec<Event>) -> (Vec<CanvasInput>, Pos2) {
    let raw_input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0))),
        events,
        ..Default::default()
    };

    let mut inputs = Vec::new();
    let mut origin = Pos2::ZERO;
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, _painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
                origin = response.rect.min;
                inputs = canvas_inputs(&response);
            });
    });
    (inputs, origin)
}

fn primary(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn test_drag_translates_to_canvas_inputs() {
    let ctx = egui::Context::default();
    let p0 = Pos2::new(50.0, 50.0);
    let p1 = Pos2::new(80.0, 60.0);
    let p2 = Pos2::new(120.0, 90.0);

    let frames = vec![
        vec![Event::PointerMoved(p0)],
        vec![primary(p0, true)],
        vec![Event::PointerMoved(p1)],
        // Same position again: no movement, no segment.
        vec![Event::PointerMoved(p1)],
        vec![Event::PointerMoved(p2)],
        vec![primary(p2, false)],
    ];

    let mut inputs = Vec::new();
    let mut origin = Pos2::ZERO;
    for events in frames {
        let (frame_inputs, frame_origin) = run_frame(&ctx, events);
        inputs.extend(frame_inputs);
        origin = frame_origin;
    }

    let local = |p: Pos2| p - origin.to_vec2();
    assert_eq!(
        inputs,
        vec![
            CanvasInput::DragStart(local(p0)),
            CanvasInput::DragMove {
                from: local(p0),
                to: local(p1),
            },
            CanvasInput::DragMove {
                from: local(p1),
                to: local(p2),
            },
            CanvasInput::DragEnd,
        ]
    );

    // Fed into a session, the drag becomes one two-segment stroke.
    let mut session = PaintSession::default();
    for input in inputs {
        session.handle_input(input);
    }
    let drawn = session.drawn_segments();
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0].group(), drawn[1].group());
    assert!(!session.gesture().is_dragging());
}

#[test]
fn test_hover_without_press_produces_nothing() {
    let ctx = egui::Context::default();

    let (first, _) = run_frame(&ctx, vec![Event::PointerMoved(Pos2::new(10.0, 10.0))]);
    let (second, _) = run_frame(&ctx, vec![Event::PointerMoved(Pos2::new(40.0, 25.0))]);

    assert!(first.is_empty());
    assert!(second.is_empty());
}
