use crate::SquaresApp;
use crate::command::Command;

pub fn tools_panel(app: &mut SquaresApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Squares");
            ui.separator();

            ui.label("Drag on the canvas to draw a rectangle.");
            ui.separator();

            // Undo/Clear only do anything while shapes are committed.
            let can_edit = app.engine().can_undo();
            ui.horizontal(|ui| {
                if ui.add_enabled(can_edit, egui::Button::new("Undo")).clicked() {
                    log::info!("undo requested from UI");
                    app.submit(Command::Undo);
                }
                if ui.add_enabled(can_edit, egui::Button::new("Clear")).clicked() {
                    log::info!("clear requested from UI");
                    app.submit(Command::Clear);
                }
            });

            ui.separator();
            ui.label(format!("Committed shapes: {}", app.engine().shape_count()));
        });
}
