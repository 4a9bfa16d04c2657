use crate::constants::columns::RAW_TABLE;
use crate::constants::layout::{RAW_TABLE_HEIGHT, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::data::RawRow;
use egui_extras::{Column, TableBuilder};

/// Render the raw filtered rows with virtual scrolling
pub fn render_data_table(ui: &mut egui::Ui, rows: &[RawRow]) {
    profiling::scope!("render_data_table");

    ui.heading("Raw Filtered Data");
    ui.label(format!("{} rows", rows.len()));
    ui.separator();

    TableBuilder::new(ui)
        .id_salt("raw_data_table")
        .striped(true)
        .max_scroll_height(RAW_TABLE_HEIGHT)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(130.0).resizable(true))
        .column(Column::initial(150.0).resizable(true).clip(true))
        .column(Column::initial(60.0).resizable(true))
        .columns(Column::initial(120.0).resizable(true).clip(true), 2)
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            for title in RAW_TABLE {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                let Some(raw) = rows.get(row.index()) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(&raw.game_date);
                });
                row.col(|ui| {
                    ui.label(&raw.player);
                });
                row.col(|ui| {
                    ui.label(format_points(raw.points));
                });
                row.col(|ui| {
                    ui.label(&raw.team);
                });
                row.col(|ui| {
                    ui.label(&raw.opponent);
                });
            });
        });
}

fn format_points(points: f64) -> String {
    if points.is_nan() {
        String::new()
    } else {
        format!("{}", points)
    }
}
