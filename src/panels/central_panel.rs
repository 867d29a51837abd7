use crate::PaintApp;
use crate::input::canvas_inputs;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());

            for input in canvas_inputs(&response) {
                app.session_mut().handle_input(input);
            }

            app.renderer()
                .render(&painter, response.rect, app.session().drawn_segments());
        });
}
