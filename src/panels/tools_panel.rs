use egui::{Color32, Sense, Stroke, vec2};

use crate::PaintApp;

const SWATCH_SIZE: f32 = 25.0;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            palette(app, ui);
            ui.separator();

            let erasing = app.session().tools().is_eraser();
            if ui.selectable_label(erasing, "Eraser").clicked() {
                app.session_mut().on_eraser_selected();
            }
            ui.separator();

            let mut width = app.session().tools().width();
            let range = app.config().width_range();
            if ui
                .add(egui::Slider::new(&mut width, range).text("Width"))
                .changed()
            {
                app.session_mut().on_width_selected(width);
            }
        });

        ui.horizontal(|ui| {
            let can_undo = app.session().can_undo();
            let can_redo = app.session().can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.session_mut().on_undo_pressed();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.session_mut().on_redo_pressed();
            }
        });
        ui.add_space(4.0);
    });
}

fn palette(app: &mut PaintApp, ui: &mut egui::Ui) {
    let tools = *app.session().tools();
    let entries = app.config().palette.clone();

    for entry in &entries {
        let color = Color32::from(entry.color);
        let (rect, response) =
            ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
        let radius = SWATCH_SIZE / 2.0;

        ui.painter().circle_filled(rect.center(), radius, color);
        if !tools.is_eraser() && tools.color() == color {
            let ring = ui.visuals().selection.stroke.color;
            ui.painter()
                .circle_stroke(rect.center(), radius + 1.5, Stroke::new(2.0, ring));
        }

        if response.on_hover_text(entry.name.as_str()).clicked() {
            app.session_mut().on_tool_color_selected(color);
        }
    }
}
