use crate::app::DashboardApp;
use crate::dashboard::DashboardView;

/// Top toolbar: export, copy, reset, theme, help, plus the status line
pub fn render_toolbar(app: &mut DashboardApp, ctx: &egui::Context, view: Option<&DashboardView>) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let has_rows = view.is_some_and(|v| !v.is_empty());

            if ui
                .add_enabled(has_rows, egui::Button::new("💾"))
                .on_hover_text("Export filtered rows to CSV")
                .clicked()
            {
                if let Some(view) = view {
                    app.export_csv(view);
                }
            }

            if ui
                .add_enabled(has_rows, egui::Button::new("📋"))
                .on_hover_text("Copy season averages")
                .clicked()
            {
                if let Some(view) = view {
                    ctx.copy_text(view.summary.to_tsv());
                    app.state
                        .ui
                        .set_info(format!("Copied {} rows of averages", view.summary.rows.len()));
                }
            }

            ui.separator();

            if ui.button("🔄").on_hover_text("Reset chart view (R)").clicked() {
                app.state.view.reset_plot_bounds();
            }
            if ui.button("↺").on_hover_text("Reset filters").clicked() {
                app.state.reset_filters();
            }

            ui.separator();
            ui.toggle_value(&mut app.state.view.show_grid, "⊞").on_hover_text("Grid (G)");
            ui.toggle_value(&mut app.state.view.show_legend, "🏷").on_hover_text("Legend (L)");

            ui.separator();
            let theme_icon = if app.state.view.dark_mode { "🌙" } else { "☀" };
            if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
                app.state.view.toggle_dark_mode();
            }
            if ui.button("❓").on_hover_text("Help (F1)").clicked() {
                app.state.view.show_help = !app.state.view.show_help;
            }

            ui.separator();
            if let Some(view) = view {
                ui.label(format!(
                    "{} of {} games | {} players",
                    view.filtered.height(),
                    app.state.row_count(),
                    view.series.len()
                ));
            }
        });

        render_status_line(app, ui);
    });
}

fn render_status_line(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let ui_state = &mut app.state.ui;
    if ui_state.error_message.is_none() && ui_state.info_message.is_none() {
        return;
    }

    ui.horizontal(|ui| {
        if let Some(error) = &ui_state.error_message {
            ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", error));
        } else if let Some(info) = &ui_state.info_message {
            ui.label(info.as_str());
        }
        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
            ui_state.clear_messages();
        }
    });
}
