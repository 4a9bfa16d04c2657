use crate::app::DashboardApp;
use crate::constants::layout::SIDEBAR_WIDTH;
use crate::dashboard::DashboardView;
use crate::widgets::{DateRange, PlayerSelect};

use super::gif_panel::render_gif_controls;
use super::stats_table::render_stats_table;

/// Left panel: filters, season averages, GIFs and the raw-data toggle
pub fn render_sidebar(app: &mut DashboardApp, ctx: &egui::Context, view: Option<&DashboardView>) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("sidebar_scroll")
                .show(ui, |ui| {
                    ui.heading("Filters");

                    let state = &mut app.state;
                    let bounds = state.data.as_ref().and_then(|log| log.date_bounds());

                    PlayerSelect::new(
                        &mut state.filters,
                        &state.players,
                        &mut state.ui.player_search,
                    )
                    .show(ui);

                    ui.add_space(6.0);
                    DateRange::new(&mut state.filters.start, &mut state.filters.end)
                        .bounds(bounds)
                        .show(ui);

                    ui.separator();
                    if let Some(view) = view {
                        render_stats_table(ui, &view.summary);
                    }

                    ui.separator();
                    render_gif_controls(app, ctx, ui);

                    ui.separator();
                    ui.checkbox(&mut app.state.view.show_raw_data, "Display Raw Filtered Data");
                });
        });
}
