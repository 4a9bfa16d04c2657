use crate::constants::layout::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::data::PointsSummary;
use egui_extras::{Column, TableBuilder};

/// Render the "Season-to-Date Averages" table
pub fn render_stats_table(ui: &mut egui::Ui, summary: &PointsSummary) {
    profiling::scope!("render_stats_table");

    ui.heading("Season-to-Date Averages");

    if summary.is_empty() {
        ui.weak("No games in the current selection.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("stats_table")
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0).clip(true))
        .columns(Column::exact(48.0), 3)
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            for title in ["Player", "Avg", "Max", "Min"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, summary.rows.len(), |mut row| {
                let Some(stats) = summary.rows.get(row.index()) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(&stats.player)
                        .on_hover_text(format!("{} games", stats.games));
                });
                for value in [stats.avg, stats.max, stats.min] {
                    row.col(|ui| {
                        ui.monospace(format!("{:.1}", value));
                    });
                }
            });
        });
}
