use crate::dashboard::DashboardView;
use crate::error::DashError;
use crate::state::{AppState, GifOutcome};
use crate::ui;

const TITLE: &str = "NBA 2025 Playoffs Performance Dashboard";

const ABOUT: &str = "Per-game points for the selected players over the chosen \
date range, season-to-date scoring averages, and how points, assists, \
rebounds, minutes, turnovers and plus/minus move together. Pick a player \
under Playoff GIFs for a highlight.";

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Write the filtered rows to a user-chosen CSV file
    pub fn export_csv(&mut self, view: &DashboardView) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("filtered_games.csv")
            .save_file()
        else {
            return;
        };

        match view.filtered.write_csv(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), rows = view.filtered.height(), "exported filtered rows");
                self.state.ui.set_info(format!(
                    "Exported {} rows to {}",
                    view.filtered.height(),
                    path.display()
                ));
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "export failed");
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Keys typed into the player search box are not shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            let view = &mut self.state.view;
            if i.key_pressed(egui::Key::R) {
                view.reset_plot_bounds();
            }
            if i.key_pressed(egui::Key::G) {
                view.show_grid = !view.show_grid;
            }
            if i.key_pressed(egui::Key::L) {
                view.show_legend = !view.show_legend;
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

    fn render_load_error(ctx: &egui::Context, error: &DashError) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading(TITLE);
                ui.add_space(12.0);
                ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", error.title()));
                ui.label(error.user_message());
                ui.add_space(8.0);
                ui.weak("Fix the dataset and restart the dashboard.");
            });
        });
    }

    fn render_central(&mut self, ctx: &egui::Context, view: &DashboardView) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("central_scroll")
                .show(ui, |ui| {
                    ui.heading(TITLE);
                    egui::CollapsingHeader::new("About this dashboard")
                        .default_open(false)
                        .show(ui, |ui| {
                            ui.label(ABOUT);
                        });
                    ui.separator();

                    ui::render_line_chart(self, ui, &view.series);

                    if matches!(self.state.ui.gif.outcome, Some(GifOutcome::Loaded { .. })) {
                        ui.separator();
                        let width = ui.available_width();
                        ui::render_gif(self, ui, width);
                    }

                    if self.state.view.show_raw_data {
                        ui.separator();
                        ui::render_data_table(ui, &view.raw_rows);
                    }

                    ui.separator();
                    ui::render_heatmap(ui, &view.correlation);
                });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();
        profiling::scope!("DashboardApp::update");

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        if let Some(error) = &self.state.load_error {
            Self::render_load_error(ctx, error);
            return;
        }

        self.handle_shortcuts(ctx);

        if let Err(e) = self.state.refresh_dashboard() {
            tracing::error!(error = %e, "failed to derive dashboard view");
            self.state.ui.set_error(e.user_message());
        }

        // Rendered from a taken view so widgets can borrow the state mutably;
        // filter edits made this frame show up on the next one
        let view = self.state.dashboard.take();
        let filters_before = self.state.filters.clone();

        ui::render_toolbar(self, ctx, view.as_ref());
        ui::render_sidebar(self, ctx, view.as_ref());

        match &view {
            Some(view) => self.render_central(ctx, view),
            None => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading(TITLE);
                });
            }
        }

        ui::render_help_dialog(self, ctx);

        self.state.dashboard = view;
        if self.state.filters != filters_before {
            ctx.request_repaint();
        }
    }
}
