//! Everything the window draws for one selection
//!
//! `DashboardView::compute` is the whole derivation step: filter, summarise,
//! correlate, split into chart series. The UI renders a view and never
//! touches the full game log directly.

use crate::constants::columns::POINTS;
use crate::data::{CorrelationMatrix, GameLog, PointsSummary, RawRow, Selection};
use crate::error::Result;
use chrono::NaiveDateTime;

/// One player's points over time, in game order
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeries {
    pub player: String,

    /// [unix seconds, points]
    pub points: Vec<[f64; 2]>,
}

/// Derived state for the current selection
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub selection: Selection,
    pub filtered: GameLog,
    pub summary: PointsSummary,
    pub correlation: CorrelationMatrix,
    pub series: Vec<PlayerSeries>,
    pub raw_rows: Vec<RawRow>,
}

impl DashboardView {
    pub fn compute(log: &GameLog, selection: &Selection) -> Result<Self> {
        profiling::scope!("DashboardView::compute");

        let filtered = log.filter(selection)?;
        let summary = PointsSummary::compute(&filtered)?;
        let correlation = CorrelationMatrix::compute(&filtered)?;
        let series = build_series(&filtered)?;
        let raw_rows = filtered.raw_rows()?;

        tracing::debug!(
            players = selection.players.len(),
            start = %selection.start,
            end = %selection.end,
            rows = filtered.height(),
            "recomputed dashboard"
        );

        Ok(Self {
            selection: selection.clone(),
            filtered,
            summary,
            correlation,
            series,
            raw_rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Split the log into one points series per player, sorted by player name.
/// Rows without a player name or points value are skipped.
pub fn build_series(log: &GameLog) -> Result<Vec<PlayerSeries>> {
    let points = log.column_as_f64(POINTS)?;
    let mut series: Vec<PlayerSeries> = Vec::new();

    for ((player, time), value) in log.player_names().iter().zip(log.game_times()).zip(points) {
        let Some(player) = player else { continue };
        if !value.is_finite() {
            continue;
        }

        let point = [to_plot_x(time), value];
        match series.iter_mut().find(|s| &s.player == player) {
            Some(existing) => existing.points.push(point),
            None => series.push(PlayerSeries {
                player: player.clone(),
                points: vec![point],
            }),
        }
    }

    series.sort_by(|a, b| a.player.cmp(&b.player));
    Ok(series)
}

/// Game time as plot x coordinate (seconds since the Unix epoch)
pub fn to_plot_x(time: &NaiveDateTime) -> f64 {
    time.and_utc().timestamp() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::sample_log;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_one_of_three_players() {
        let log = sample_log();
        assert_eq!(log.players().len(), 3);

        let selection = Selection::new(["Jalen Brunson"], date(19), date(24));
        let view = DashboardView::compute(&log, &selection).unwrap();

        assert_eq!(view.series.len(), 1);
        assert_eq!(view.series[0].player, "Jalen Brunson");
        assert_eq!(view.summary.rows.len(), 1);
        assert_eq!(view.raw_rows.len(), 3);
    }

    #[test]
    fn test_range_without_games() {
        let log = sample_log();
        let selection = Selection::new(log.players(), date(1), date(10));
        let view = DashboardView::compute(&log, &selection).unwrap();

        assert!(view.is_empty());
        assert!(view.series.is_empty());
        assert!(view.summary.is_empty());
        assert!(view.raw_rows.is_empty());
        assert_eq!(view.correlation.features.len(), 6);
        assert!(view.correlation.is_undefined());
    }

    #[test]
    fn test_no_players_selected() {
        let log = sample_log();
        let selection = Selection::new(Vec::<String>::new(), date(19), date(24));
        let view = DashboardView::compute(&log, &selection).unwrap();

        assert!(view.series.is_empty());
        assert!(view.summary.is_empty());
    }

    #[test]
    fn test_series_in_game_order() {
        let log = sample_log();
        let series = build_series(&log).unwrap();

        let names: Vec<&str> = series.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(names, vec!["Jalen Brunson", "LeBron James", "Stephen Curry"]);

        let brunson: Vec<f64> = series[0].points.iter().map(|p| p[1]).collect();
        assert_eq!(brunson, vec![34.0, 37.0, 30.0]);
        assert!(series[0].points.windows(2).all(|w| w[0][0] < w[1][0]));

        let lebron: Vec<f64> = series[1].points.iter().map(|p| p[1]).collect();
        assert_eq!(lebron, vec![19.0, 21.0]);
    }

    #[test]
    fn test_plot_x_is_unix_seconds() {
        let time = date(19).and_hms_opt(20, 0, 0).unwrap();
        assert_eq!(to_plot_x(&time), 1_745_092_800.0);
    }
}
