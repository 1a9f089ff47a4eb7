use crate::SquaresApp;

pub fn central_panel(app: &mut SquaresApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_rect = ui.available_rect_before_wrap();
        app.set_canvas_rect(canvas_rect);

        // The canvas itself: a painter surface the renderer draws into.
        let (_response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        app.renderer().render(&painter);
    });
}
