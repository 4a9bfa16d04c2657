use crate::app::DashboardApp;
use crate::constants::plot::{LINE_CHART_MIN_HEIGHT, MARKER_RADIUS};
use crate::dashboard::PlayerSeries;
use chrono::{DateTime, Utc};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, Points};

/// Series colour by position in the (name-sorted) series list
pub fn series_color(index: usize) -> Color32 {
    let colors = [
        Color32::from_rgb(31, 119, 180),  // Blue
        Color32::from_rgb(255, 127, 14),  // Orange
        Color32::from_rgb(44, 160, 44),   // Green
        Color32::from_rgb(214, 39, 40),   // Red
        Color32::from_rgb(148, 103, 189), // Purple
        Color32::from_rgb(140, 86, 75),   // Brown
        Color32::from_rgb(227, 119, 194), // Pink
        Color32::from_rgb(127, 127, 127), // Gray
        Color32::from_rgb(188, 189, 34),  // Yellow
        Color32::from_rgb(23, 190, 207),  // Cyan
    ];
    colors[index % colors.len()]
}

/// Axis tick text for an x value in unix seconds
pub fn format_axis_date(x: f64) -> String {
    DateTime::<Utc>::from_timestamp(x.round() as i64, 0)
        .map(|dt| dt.format("%b %d").to_string())
        .unwrap_or_default()
}

/// Hover text for a point: date, then player, then points
pub fn format_hover(player: &str, x: f64, y: f64) -> String {
    let date = DateTime::<Utc>::from_timestamp(x.round() as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{:.0}", x));

    if player.is_empty() {
        format!("{}\n{:.0} pts", date, y)
    } else {
        format!("{}\n{}\n{:.0} pts", date, player, y)
    }
}

/// Render the per-game points chart
pub fn render_line_chart(app: &mut DashboardApp, ui: &mut egui::Ui, series: &[PlayerSeries]) {
    profiling::scope!("render_line_chart");

    ui.heading("Per-Game Points Over Time");
    if series.is_empty() {
        ui.weak("No games match the current selection.");
    }

    let view = &mut app.state.view;
    let plot_height = ui.available_height().max(LINE_CHART_MIN_HEIGHT);

    let mut plot = Plot::new("points_chart")
        .height(plot_height)
        .show_grid(view.show_grid)
        .x_axis_label("Game Date")
        .y_axis_label("Points")
        .x_axis_formatter(|mark, _range| format_axis_date(mark.value))
        .label_formatter(|name, value| format_hover(name, value.x, value.y));

    if view.reset_bounds {
        plot = plot.reset();
        view.reset_bounds = false;
    }

    if view.show_legend {
        plot = plot.legend(Legend::default().position(Corner::LeftTop));
    }

    let response = plot.show(ui, |plot_ui| {
        for (idx, s) in series.iter().enumerate() {
            let color = series_color(idx);
            plot_ui.line(Line::new(s.player.as_str(), s.points.clone()).color(color));
            plot_ui.points(
                Points::new(s.player.as_str(), s.points.clone())
                    .radius(MARKER_RADIUS)
                    .color(color),
            );
        }
    });

    response.response.context_menu(|ui| {
        if ui.button("Reset View").clicked() {
            app.state.view.reset_bounds = true;
            ui.close();
        }
        if ui.button("Toggle Grid").clicked() {
            app.state.view.show_grid = !app.state.view.show_grid;
            ui.close();
        }
        if ui.button("Toggle Legend").clicked() {
            app.state.view.show_legend = !app.state.view.show_legend;
            ui.close();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const APR_19_8PM: f64 = 1_745_092_800.0;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(series_color(0), Color32::from_rgb(31, 119, 180));
        assert_eq!(series_color(10), series_color(0));
        assert_ne!(series_color(1), series_color(2));
    }

    #[test]
    fn test_axis_dates() {
        assert_eq!(format_axis_date(APR_19_8PM), "Apr 19");
    }

    #[test]
    fn test_hover_text() {
        assert_eq!(
            format_hover("Jalen Brunson", APR_19_8PM, 34.0),
            "2025-04-19\nJalen Brunson\n34 pts"
        );
        assert_eq!(format_hover("", APR_19_8PM, 12.4), "2025-04-19\n12 pts");
    }
}
