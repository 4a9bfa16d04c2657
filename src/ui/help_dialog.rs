use crate::app::DashboardApp;

pub fn render_help_dialog(app: &mut DashboardApp, ctx: &egui::Context) {
    if app.state.view.show_help {
        egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Navigation");
                ui.label("R - Reset chart view");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Chart");
                ui.label("Scroll - Zoom in/out");
                ui.label("Drag - Pan view");
                ui.label("Hover point - Date, player and points");
                ui.label("Right-click - Context menu");

                ui.separator();
                ui.heading("Heatmap");
                ui.label("Hover cell - Feature pair and exact r");
                ui.label("Grey cell - Correlation undefined for the selection");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
