//! Application state management
//!
//! The dashboard's session state split into focused pieces: filter widget
//! values, view toggles, transient UI state, plus the loaded game log and
//! the view derived from it.

mod filters;
mod ui;
mod view;

pub use filters::FilterState;
pub use ui::{GifOutcome, GifPanelState, UiState};
pub use view::ViewState;

use crate::config::Settings;
use crate::dashboard::DashboardView;
use crate::data::GameLog;
use crate::error::{DashError, Result};
use crate::gif::GifFetcher;

/// Main application state container
pub struct AppState {
    pub settings: Settings,

    /// Game log; None when loading failed
    pub data: Option<GameLog>,

    /// Why the game log could not be loaded (fatal for the session)
    pub load_error: Option<DashError>,

    /// Distinct players in the game log, sorted
    pub players: Vec<String>,

    /// Player and date filter widgets
    pub filters: FilterState,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,

    /// GIF lookups, or the reason they are unavailable
    pub gif_fetcher: std::result::Result<GifFetcher, String>,

    /// View derived from the current filters
    pub dashboard: Option<DashboardView>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        data: Result<GameLog>,
        gif_fetcher: std::result::Result<GifFetcher, String>,
    ) -> Self {
        let (data, load_error) = match data {
            Ok(log) => (Some(log), None),
            Err(e) => (None, Some(e)),
        };

        let players = data.as_ref().map(GameLog::players).unwrap_or_default();
        let filters = data
            .as_ref()
            .map(|log| FilterState::defaults(log, &settings))
            .unwrap_or_default();

        let gif_player = if players.contains(&settings.anchor_player) {
            settings.anchor_player.clone()
        } else {
            players.first().cloned().unwrap_or_default()
        };

        Self {
            settings,
            data,
            load_error,
            players,
            filters,
            view: ViewState::default(),
            ui: UiState {
                gif: GifPanelState::new(gif_player),
                ..UiState::default()
            },
            gif_fetcher,
            dashboard: None,
        }
    }

    /// Get the number of rows in the full game log
    pub fn row_count(&self) -> usize {
        self.data.as_ref().map(GameLog::height).unwrap_or(0)
    }

    /// Put the player and date filters back to their startup defaults
    pub fn reset_filters(&mut self) {
        if let Some(log) = &self.data {
            self.filters = FilterState::defaults(log, &self.settings);
        }
    }

    /// Recompute the derived view when the filters changed since the last
    /// call. Returns true when a recompute happened.
    pub fn refresh_dashboard(&mut self) -> Result<bool> {
        let Some(log) = &self.data else {
            return Ok(false);
        };

        self.filters.validate();
        let selection = self.filters.selection();
        if self
            .dashboard
            .as_ref()
            .is_some_and(|view| view.selection == selection)
        {
            return Ok(false);
        }

        self.dashboard = Some(DashboardView::compute(log, &selection)?);
        Ok(true)
    }

    /// Whether the "Load GIF" button can do anything
    pub fn gif_enabled(&self) -> bool {
        self.gif_fetcher.is_ok() && !self.ui.gif.player.is_empty()
    }

    /// Run one GIF lookup for the selected player. Returns the URI of the
    /// image this replaces, for eviction from the image cache.
    pub fn load_gif(&mut self) -> Option<String> {
        let fetcher = self.gif_fetcher.as_ref().ok()?;
        if self.ui.gif.player.is_empty() {
            return None;
        }

        let image = fetcher.fetch(&self.ui.gif.player);
        self.ui.gif.record(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::sample_log;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn no_gifs() -> std::result::Result<GifFetcher, String> {
        Err("Missing credential".to_string())
    }

    #[test]
    fn test_new_with_data() {
        let state = AppState::new(Settings::default(), Ok(sample_log()), no_gifs());

        assert!(state.load_error.is_none());
        assert_eq!(state.row_count(), 8);
        assert_eq!(state.players.len(), 3);
        assert_eq!(state.ui.gif.player, "LeBron James");
        assert!(!state.gif_enabled());
    }

    #[test]
    fn test_gif_player_falls_back_to_first() {
        let settings = Settings {
            anchor_player: "Nikola Jokic".to_string(),
            ..Settings::default()
        };
        let state = AppState::new(settings, Ok(sample_log()), no_gifs());
        assert_eq!(state.ui.gif.player, "Jalen Brunson");
    }

    #[test]
    fn test_load_failure_is_kept() {
        let mut state = AppState::new(Settings::default(), Err(DashError::EmptyDataset), no_gifs());

        assert!(state.data.is_none());
        assert!(matches!(state.load_error, Some(DashError::EmptyDataset)));
        assert!(state.players.is_empty());
        assert!(!state.refresh_dashboard().unwrap());
        assert!(state.dashboard.is_none());
    }

    #[test]
    fn test_refresh_only_when_filters_change() {
        let mut state = AppState::new(Settings::default(), Ok(sample_log()), no_gifs());

        assert!(state.refresh_dashboard().unwrap());
        assert!(!state.refresh_dashboard().unwrap());
        assert_eq!(state.dashboard.as_ref().unwrap().series.len(), 3);

        state.filters.toggle("LeBron James");
        assert!(state.refresh_dashboard().unwrap());
        assert_eq!(state.dashboard.as_ref().unwrap().series.len(), 2);
    }

    #[test]
    fn test_refresh_swaps_inverted_dates() {
        let mut state = AppState::new(Settings::default(), Ok(sample_log()), no_gifs());
        state.filters.start = date(24);
        state.filters.end = date(21);

        state.refresh_dashboard().unwrap();

        let view = state.dashboard.as_ref().unwrap();
        assert_eq!((view.selection.start, view.selection.end), (date(21), date(24)));
        assert_eq!(view.filtered.height(), 4);
    }

    #[test]
    fn test_reset_filters() {
        let mut state = AppState::new(Settings::default(), Ok(sample_log()), no_gifs());
        state.filters.clear_players();
        state.filters.start = date(22);

        state.reset_filters();
        assert_eq!(state.filters.players.len(), 3);
        assert_eq!(state.filters.start, date(19));
    }

    #[test]
    fn test_load_gif_without_fetcher_is_noop() {
        let mut state = AppState::new(Settings::default(), Ok(sample_log()), no_gifs());
        assert_eq!(state.load_gif(), None);
        assert!(state.ui.gif.outcome.is_none());
    }
}
