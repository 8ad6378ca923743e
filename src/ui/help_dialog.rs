use crate::app::HitOxide;

pub fn render_help_dialog(app: &mut HitOxide, ctx: &eframe::egui::Context) {
    if app.state.view.show_help {
        eframe::egui::Window::new("⌨ Help")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Keyboard");
                ui.label("1-4 - Switch page");
                ui.label("Space - Play/pause the genre race");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Charts");
                ui.label("Hover a point - Show genre, artist, track and duration");
                ui.label("Click a point or row - Copy \"artist track\" to the clipboard");
                ui.label("Smart sampling - Keeps every track before the protected year and thins recent ones");

                ui.separator();
                ui.heading("Data");
                ui.label("Open a CSV or JSON dataset, or drop it on the window");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
