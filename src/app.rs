use eframe::egui::{self, CentralPanel, SidePanel, TopBottomPanel};
use std::path::{Path, PathBuf};

use crate::config::ExplorerConfig;
use crate::constants;
use crate::data::DataSource;
use crate::error::{HitError, Result};
use crate::state::{self, ActiveTab};
use crate::timed;
use crate::ui;
use crate::widgets::FilterControls;

#[derive(Default)]
pub struct HitOxide {
    pub state: state::AppState,
}

impl HitOxide {
    pub fn new(config: ExplorerConfig) -> Self {
        let mut app = Self::default();
        app.state.config = config;
        app.state.apply_config();
        app
    }

    pub fn load_file(&mut self, path: PathBuf) -> Result<()> {
        if path.is_dir() {
            return Err(HitError::Custom(format!(
                "'{}' is a folder, drop a CSV or JSON file instead",
                path.display()
            )));
        }
        let data = timed!("load_dataset", DataSource::load(&path))?;
        self.state.set_data(data, path);
        Ok(())
    }

    /// Load `path`, reporting failures in the error window
    pub fn open(&mut self, path: PathBuf) {
        if let Err(e) = self.load_file(path) {
            self.report(&e);
        }
    }

    fn report(&mut self, error: &HitError) {
        tracing::error!(error = %error, "{}", error.title());
        self.state.ui.set_error(error.title(), error.user_message());
    }

    pub fn save_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(constants::config::CONFIG_FILE)
            .save_file()
        {
            if let Err(e) = self.write_config(&path) {
                self.report(&e);
            }
        }
    }

    pub fn write_config(&mut self, path: &Path) -> Result<()> {
        self.state.sync_config();
        self.state.config.save_to(path)
    }

    pub fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            if let Err(e) = self.read_config(&path) {
                self.report(&e);
            }
        }
    }

    /// Apply settings from `path`
    pub fn read_config(&mut self, path: &Path) -> Result<()> {
        self.state.config = ExplorerConfig::load_from(path)?;
        self.state.apply_config();
        Ok(())
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Text fields keep their keystrokes
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            let view = &mut self.state.view;
            for (key, tab) in [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4]
                .into_iter()
                .zip(ActiveTab::ALL)
            {
                if i.key_pressed(key) {
                    view.active_tab = tab;
                }
            }
            if view.active_tab == ActiveTab::Genres && i.key_pressed(egui::Key::Space) {
                view.race.toggle();
            }
            if i.key_pressed(egui::Key::T) {
                view.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                view.show_help = !view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                view.show_help = false;
            }
        });
    }

    fn render_error_window(&mut self, ctx: &egui::Context) {
        let Some((title, message)) = self.state.ui.error_message.clone() else {
            return;
        };
        egui::Window::new(format!("⚠ {}", title))
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.state.ui.clear_error();
                }
            });
    }
}

impl eframe::App for HitOxide {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);

        if self.state.view.race.playing {
            let dt = ctx.input(|i| i.stable_dt);
            self.state.view.race.tick(dt);
            ctx.request_repaint();
        }

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::render_toolbar(self, ctx, ui);
        });

        if let Some(data) = &self.state.data {
            let report = data.report();
            TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(name) = data.file_path().and_then(|p| p.file_name()) {
                        ui.label(format!("📁 {}", name.to_string_lossy()));
                        ui.separator();
                    }
                    ui.label(format!("Tracks: {} of {} rows", report.kept(), report.total_rows));
                    if report.dropped_invalid > 0 {
                        ui.separator();
                        ui.label(format!("Dropped: {} invalid", report.dropped_invalid));
                    }
                    if self.state.outside_window > 0 {
                        ui.separator();
                        ui.label(format!(
                            "{} after {} (genre race only)",
                            self.state.outside_window, self.state.config.max_year
                        ));
                    }
                });
            });
        }

        if self.state.has_data() {
            SidePanel::left("filters")
                .default_width(constants::layout::FILTER_PANEL_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let state = &mut self.state;
                        FilterControls::new(&mut state.filters, &state.regions, &state.years).show(ui);
                    });
                });
        }

        // Recompute derived data after this frame's control changes
        if self.state.refresh_derived() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            if !self.state.has_data() {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.heading("No data loaded");
                    ui.label("Open a CSV or JSON dataset, or drag and drop one onto the window");
                });
                return;
            }

            ui::render_kpi_panel(self, ui);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.state.view.active_tab {
                ActiveTab::Timeline => ui::render_timeline_tab(self, ui),
                ActiveTab::Genres => ui::render_genres_tab(self, ui),
                ActiveTab::Regions => ui::render_regions_tab(self, ui),
                ActiveTab::TopTracks => ui::render_top_list(self, ui),
            });
        });

        ui::render_help_dialog(self, ctx);
        self.render_error_window(ctx);
    }
}
