//! Player/date filtering of the game log

use super::source::GameLog;
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Which rows the dashboard is looking at: a set of players and an inclusive
/// date interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub players: BTreeSet<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Selection {
    pub fn new<I, S>(players: I, start: NaiveDate, end: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            start,
            end,
        }
    }

    /// Row predicate. A start later than the end matches nothing.
    pub fn matches(&self, player: Option<&str>, date: NaiveDate) -> bool {
        player.is_some_and(|p| self.players.contains(p)) && self.start <= date && date <= self.end
    }
}

impl GameLog {
    /// Rows whose player is selected and whose date lies in the interval.
    /// Returns a new log; `self` is left untouched.
    pub fn filter(&self, selection: &Selection) -> Result<GameLog> {
        profiling::scope!("GameLog::filter");

        let mask: Vec<bool> = self
            .player_names()
            .iter()
            .zip(self.dates())
            .map(|(player, date)| selection.matches(player.as_deref(), *date))
            .collect();

        self.select_rows(&mask)
    }
}

/// Default player selection: the anchor (when the dataset has it) followed by
/// the first `extra` other players in alphabetical order
pub fn default_players(players: &[String], anchor: &str, extra: usize) -> Vec<String> {
    let mut sorted: Vec<&String> = players.iter().collect();
    sorted.sort();
    sorted.dedup();

    let anchor_present = sorted.iter().any(|p| p.as_str() == anchor);

    anchor_present
        .then(|| anchor.to_string())
        .into_iter()
        .chain(
            sorted
                .into_iter()
                .filter(|p| p.as_str() != anchor)
                .take(extra)
                .cloned(),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::columns::POINTS;
    use crate::data::source::tests::sample_log;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_filter_by_player_and_dates() {
        let log = sample_log();
        let selection = Selection::new(["Jalen Brunson"], date(19), date(21));

        let filtered = log.filter(&selection).unwrap();

        assert_eq!(filtered.height(), 2);
        assert_eq!(filtered.column_as_f64(POINTS).unwrap(), vec![34.0, 37.0]);
        // Source is not mutated
        assert_eq!(log.height(), 8);
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let log = sample_log();
        let everyone = log.players();

        let selections = [
            Selection::new(everyone.clone(), date(19), date(24)),
            Selection::new(["LeBron James", "Stephen Curry"], date(20), date(22)),
            Selection::new(["Stephen Curry"], date(20), date(20)),
            Selection::new(["Nobody"], date(19), date(24)),
        ];

        for selection in &selections {
            let filtered = log.filter(selection).unwrap();

            // Every kept row qualifies
            for (player, d) in filtered.player_names().iter().zip(filtered.dates()) {
                assert!(selection.matches(player.as_deref(), *d));
            }

            // No qualifying row was dropped
            let expected = log
                .player_names()
                .iter()
                .zip(log.dates())
                .filter(|(p, d)| selection.matches(p.as_deref(), **d))
                .count();
            assert_eq!(filtered.height(), expected);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let log = sample_log();
        let selection = Selection::new(["LeBron James", "Jalen Brunson"], date(20), date(24));

        let once = log.filter(&selection).unwrap();
        let twice = once.filter(&selection).unwrap();

        assert_eq!(once.height(), twice.height());
        assert_eq!(once.game_times(), twice.game_times());
        assert_eq!(once.player_names(), twice.player_names());
        assert!(once.dataframe().equals_missing(twice.dataframe()));
    }

    #[test]
    fn test_empty_selection_yields_empty_log() {
        let log = sample_log();
        let selection = Selection::new(Vec::<String>::new(), date(19), date(24));

        let filtered = log.filter(&selection).unwrap();
        assert!(filtered.is_empty());
        assert_eq!(filtered.date_bounds(), None);
    }

    #[test]
    fn test_inverted_interval_yields_empty_log() {
        let log = sample_log();
        let selection = Selection::new(log.players(), date(24), date(19));

        assert!(log.filter(&selection).unwrap().is_empty());
    }

    #[test]
    fn test_interval_is_inclusive() {
        let log = sample_log();
        let selection = Selection::new(["Jalen Brunson"], date(19), date(24));

        let filtered = log.filter(&selection).unwrap();
        assert_eq!(filtered.height(), 3);
        assert_eq!(filtered.date_bounds(), Some((date(19), date(24))));
    }

    #[test]
    fn test_default_players_with_anchor() {
        let players: Vec<String> = ["Stephen Curry", "LeBron James", "Anthony Edwards", "Jalen Brunson"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            default_players(&players, "LeBron James", 2),
            vec!["LeBron James", "Anthony Edwards", "Jalen Brunson"]
        );
    }

    #[test]
    fn test_default_players_without_anchor() {
        let players: Vec<String> = ["Stephen Curry", "Jalen Brunson"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            default_players(&players, "LeBron James", 2),
            vec!["Jalen Brunson", "Stephen Curry"]
        );
        assert!(default_players(&[], "LeBron James", 2).is_empty());
    }
}
