use crate::app::HitOxide;
use crate::state::ActiveTab;
use eframe::egui;

/// File, configuration and theme buttons plus the page tabs
pub fn render_toolbar(app: &mut HitOxide, ctx: &egui::Context, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        // File operations
        if ui.button("📂").on_hover_text("Open dataset (CSV or JSON)").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Datasets", &["csv", "json"])
                .pick_file()
            {
                app.open(path);
            }
        }

        // Recent files menu
        if !app.state.recent_files.is_empty() {
            egui::ComboBox::from_id_salt("recent_files")
                .selected_text("📋")
                .show_ui(ui, |ui| {
                    ui.label("Recent Files:");
                    ui.separator();
                    for path in app.state.recent_files.clone() {
                        if let Some(name) = path.file_name() {
                            if ui.button(name.to_string_lossy()).clicked() {
                                app.open(path.clone());
                            }
                        }
                    }
                });
        }

        if let Some(file) = &app.state.current_file {
            ui.label(format!(
                "📄 {}",
                file.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("Unknown")
            ))
            .on_hover_text(file.display().to_string());
        }

        ui.separator();

        if ui.button("⚙").on_hover_text("Save settings").clicked() {
            app.save_config();
        }
        if ui.button("📥").on_hover_text("Load settings").clicked() {
            app.load_config();
        }

        ui.separator();
        let theme_icon = if app.state.view.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
            app.state.view.toggle_dark_mode();
        }
        if ui.button("❓").on_hover_text("Help (F1)").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }
    });

    // Drag and drop
    let dropped = ctx.input(|i| {
        i.raw
            .dropped_files
            .first()
            .and_then(|f| f.path.clone())
    });
    if let Some(path) = dropped {
        app.open(path);
    }

    if app.state.has_data() {
        ui.separator();
        ui.horizontal(|ui| {
            for tab in ActiveTab::ALL {
                ui.selectable_value(&mut app.state.view.active_tab, tab, tab.label());
            }
        });
    }
}
