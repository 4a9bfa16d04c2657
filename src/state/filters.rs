//! Player and date-range filter state

use crate::config::Settings;
use crate::data::filter::default_players;
use crate::data::{GameLog, Selection};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Current player multiselect and date-range widget values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Selected player display names
    pub players: BTreeSet<String>,

    /// Inclusive start date
    pub start: NaiveDate,

    /// Inclusive end date
    pub end: NaiveDate,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            players: BTreeSet::new(),
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }
}

impl FilterState {
    /// Defaults: anchor plus alphabetical companions, full date range
    pub fn defaults(log: &GameLog, settings: &Settings) -> Self {
        let players = default_players(
            &log.players(),
            &settings.anchor_player,
            settings.default_extra_players,
        );
        let (start, end) = log
            .date_bounds()
            .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

        Self {
            players: players.into_iter().collect(),
            start,
            end,
        }
    }

    pub fn is_selected(&self, player: &str) -> bool {
        self.players.contains(player)
    }

    /// Add or remove a player
    pub fn toggle(&mut self, player: &str) {
        if !self.players.remove(player) {
            self.players.insert(player.to_string());
        }
    }

    pub fn select_all<'a>(&mut self, players: impl IntoIterator<Item = &'a String>) {
        self.players.extend(players.into_iter().cloned());
    }

    /// Clear all selected players
    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    /// Validate and fix the date range: a start after the end is swapped
    pub fn validate(&mut self) {
        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }

    /// Predicate input for the filter engine
    pub fn selection(&self) -> Selection {
        Selection::new(self.players.iter().cloned(), self.start, self.end)
    }
}
