//! Annotated correlation heatmap

use crate::constants::plot::{HEATMAP_CELL, HEATMAP_LABEL_WIDTH};
use crate::data::CorrelationMatrix;
use egui::{Align2, Color32, FontId, Label, RichText, Sense, Ui, vec2};

const NEGATIVE: Color32 = Color32::from_rgb(214, 39, 40);
const NEUTRAL: Color32 = Color32::from_rgb(247, 247, 247);
const POSITIVE: Color32 = Color32::from_rgb(31, 119, 180);
const UNDEFINED: Color32 = Color32::from_rgb(160, 160, 160);

const LEGEND_STEPS: usize = 40;

/// Render the matrix as a grid of coloured, labelled cells
pub fn render_heatmap(ui: &mut Ui, matrix: &CorrelationMatrix) {
    profiling::scope!("render_heatmap");

    ui.heading("Correlation Matrix of Key Player Stats");
    if matrix.is_undefined() {
        ui.weak("Not enough games in the current selection to correlate.");
    }
    ui.add_space(4.0);

    egui::ScrollArea::horizontal()
        .id_salt("heatmap_scroll")
        .show(ui, |ui| {
            egui::Grid::new("correlation_heatmap")
                .spacing(vec2(2.0, 2.0))
                .show(ui, |ui| {
                    let _ = ui.allocate_exact_size(vec2(column_width(0), 0.0), Sense::hover());
                    for (j, feature) in matrix.features.iter().enumerate() {
                        ui.add_sized(
                            [column_width(j + 1), HEATMAP_CELL * 0.3],
                            Label::new(RichText::new(feature).small()),
                        );
                    }
                    ui.end_row();

                    for (i, row_feature) in matrix.features.iter().enumerate() {
                        ui.add_sized(
                            [column_width(0), HEATMAP_CELL * 0.5],
                            Label::new(RichText::new(row_feature).small()),
                        );
                        for (j, col_feature) in matrix.features.iter().enumerate() {
                            let r = matrix.get(i, j);
                            let (rect, response) = ui.allocate_exact_size(
                                vec2(column_width(j + 1), HEATMAP_CELL * 0.5),
                                Sense::hover(),
                            );
                            ui.painter().rect_filled(rect, 2.0, correlation_color(r));
                            ui.painter().text(
                                rect.center(),
                                Align2::CENTER_CENTER,
                                cell_label(r),
                                FontId::proportional(12.0),
                                text_color(r),
                            );
                            response.on_hover_text(hover_text(row_feature, col_feature, r));
                        }
                        ui.end_row();
                    }
                });
        });

    ui.add_space(8.0);
    render_legend(ui);
}

/// Horizontal gradient from -1 to +1
fn render_legend(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("Correlation (r)");
        ui.small("-1");

        let step = 4.0;
        let (rect, _) = ui.allocate_exact_size(
            vec2(step * LEGEND_STEPS as f32, 14.0),
            Sense::hover(),
        );
        for k in 0..LEGEND_STEPS {
            let r = -1.0 + 2.0 * (k as f64 + 0.5) / LEGEND_STEPS as f64;
            let min = rect.min + vec2(step * k as f32, 0.0);
            let swatch = egui::Rect::from_min_size(min, vec2(step, rect.height()));
            ui.painter().rect_filled(swatch, 0.0, correlation_color(r));
        }

        ui.small("+1");
        ui.add_space(12.0);

        let (swatch, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, UNDEFINED);
        ui.small("undefined");
    });
}

/// Diverging colour scale: red at -1, near-white at 0, blue at +1.
/// Values outside [-1, 1] are clamped; NaN is grey.
pub fn correlation_color(r: f64) -> Color32 {
    if r.is_nan() {
        return UNDEFINED;
    }

    let r = r.clamp(-1.0, 1.0) as f32;
    if r >= 0.0 {
        lerp(NEUTRAL, POSITIVE, r)
    } else {
        lerp(NEUTRAL, NEGATIVE, -r)
    }
}

fn lerp(from: Color32, to: Color32, t: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Cell annotation: two decimals, or "n/a" when undefined
pub fn cell_label(r: f64) -> String {
    if r.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}", r)
    }
}

/// Readable text over the cell colour
pub fn text_color(r: f64) -> Color32 {
    if r.abs() > 0.5 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

/// Width of a grid column: the row-label column, then one per feature
pub fn column_width(col: usize) -> f32 {
    if col == 0 { HEATMAP_LABEL_WIDTH } else { HEATMAP_CELL }
}

pub fn hover_text(row: &str, col: &str, r: f64) -> String {
    if r.is_nan() {
        format!("{} × {}: r undefined", row, col)
    } else {
        format!("{} × {}: r = {}", row, col, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(correlation_color(-1.0), NEGATIVE);
        assert_eq!(correlation_color(0.0), NEUTRAL);
        assert_eq!(correlation_color(1.0), POSITIVE);
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(correlation_color(1.7), correlation_color(1.0));
        assert_eq!(correlation_color(-3.0), correlation_color(-1.0));
    }

    #[test]
    fn test_scale_is_deterministic_and_diverging() {
        assert_eq!(correlation_color(0.42), correlation_color(0.42));

        let half_pos = correlation_color(0.5);
        let half_neg = correlation_color(-0.5);
        assert!(half_pos.b() > half_pos.r());
        assert!(half_neg.r() > half_neg.b());
    }

    #[test]
    fn test_label_column_fits_feature_names() {
        assert_eq!(column_width(0), HEATMAP_LABEL_WIDTH);
        assert!(column_width(0) > column_width(1));
        assert_eq!(column_width(6), HEATMAP_CELL);
    }

    #[test]
    fn test_nan_cell() {
        assert_eq!(correlation_color(f64::NAN), UNDEFINED);
        assert_eq!(cell_label(f64::NAN), "n/a");
        assert_eq!(text_color(f64::NAN), Color32::BLACK);
        assert_eq!(
            hover_text("points", "turnovers", f64::NAN),
            "points × turnovers: r undefined"
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(cell_label(1.0), "1.00");
        assert_eq!(cell_label(0.456), "0.46");
        assert_eq!(cell_label(-0.3333), "-0.33");
        assert_eq!(
            hover_text("points", "assists", 0.123456),
            "points × assists: r = 0.123456"
        );
        assert_eq!(text_color(0.9), Color32::WHITE);
        assert_eq!(text_color(-0.2), Color32::BLACK);
    }
}
