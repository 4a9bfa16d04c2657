//! Player multiselect widget

use crate::constants::layout::PLAYER_LIST_HEIGHT;
use crate::state::FilterState;
use egui::{Response, Ui};

/// Checkbox list of players with a search box and select-all / clear
pub struct PlayerSelect<'a> {
    filters: &'a mut FilterState,
    players: &'a [String],
    search: &'a mut String,
}

impl<'a> PlayerSelect<'a> {
    pub fn new(filters: &'a mut FilterState, players: &'a [String], search: &'a mut String) -> Self {
        Self {
            filters,
            players,
            search,
        }
    }

    /// Show the widget. The response is marked changed when the selection
    /// changed.
    pub fn show(self, ui: &mut Ui) -> Response {
        let mut changed = false;

        let mut response = ui
            .vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "Players ({} of {})",
                        self.filters.players.len(),
                        self.players.len()
                    ));
                    if ui.small_button("All").clicked() {
                        self.filters.select_all(self.players);
                        changed = true;
                    }
                    if ui.small_button("Clear").clicked() {
                        self.filters.clear_players();
                        changed = true;
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("🔍");
                    ui.add(
                        egui::TextEdit::singleline(&mut *self.search)
                            .hint_text("Search players...")
                            .desired_width(f32::INFINITY),
                    );
                });

                let needle = self.search.trim().to_lowercase();
                egui::ScrollArea::vertical()
                    .id_salt("player_list")
                    .max_height(PLAYER_LIST_HEIGHT)
                    .show(ui, |ui| {
                        for player in matching(self.players, &needle) {
                            let mut selected = self.filters.is_selected(player);
                            if ui.checkbox(&mut selected, player.as_str()).changed() {
                                self.filters.toggle(player);
                                changed = true;
                            }
                        }
                    });
            })
            .response;

        if changed {
            response.mark_changed();
        }
        response
    }
}

/// Players whose name contains `needle` (already lowercased)
fn matching<'p>(players: &'p [String], needle: &'p str) -> impl Iterator<Item = &'p String> {
    players
        .iter()
        .filter(move |p| needle.is_empty() || p.to_lowercase().contains(needle))
}
