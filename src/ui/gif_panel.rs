use crate::app::DashboardApp;
use crate::constants::gif::SIDEBAR_WIDTH;
use crate::state::GifOutcome;

/// Selectbox, "Load GIF" button and the result, for the sidebar
pub fn render_gif_controls(app: &mut DashboardApp, ctx: &egui::Context, ui: &mut egui::Ui) {
    ui.heading("Playoff GIFs");

    let state = &mut app.state;
    egui::ComboBox::from_id_salt("gif_player")
        .selected_text(state.ui.gif.player.as_str())
        .width(ui.available_width() - 90.0)
        .show_ui(ui, |ui| {
            for player in &state.players {
                ui.selectable_value(&mut state.ui.gif.player, player.clone(), player.as_str());
            }
        });

    let enabled = state.gif_enabled();
    let mut button = ui.add_enabled(enabled, egui::Button::new("Load GIF"));
    if let Err(reason) = &state.gif_fetcher {
        button = button.on_disabled_hover_text(reason.as_str());
    }

    if button.clicked() {
        tracing::debug!(player = %state.ui.gif.player, "GIF requested");
        if let Some(old_uri) = state.load_gif() {
            ctx.forget_image(&old_uri);
        }
    }

    if let Err(reason) = &state.gif_fetcher {
        ui.colored_label(ui.visuals().warn_fg_color, reason.as_str());
    }

    render_gif(app, ui, SIDEBAR_WIDTH);
}

/// The last lookup result: the image with its caption, or "No GIF found."
pub fn render_gif(app: &DashboardApp, ui: &mut egui::Ui, max_width: f32) {
    match &app.state.ui.gif.outcome {
        Some(GifOutcome::Loaded { player, uri, bytes }) => {
            ui.add(
                egui::Image::from_bytes(uri.clone(), bytes.clone())
                    .max_width(max_width),
            );
            ui.small(player);
        }
        Some(GifOutcome::NotFound) => {
            ui.label("No GIF found.");
        }
        None => {}
    }
}
