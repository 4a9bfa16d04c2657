use super::source::GameLog;
use crate::constants::columns::{PLAYER, POINTS};
use crate::error::Result;
use polars::prelude::*;

/// Per-player points summary row
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPoints {
    pub player: String,
    pub games: usize,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

/// Season-to-date points summary, one row per player present in the log,
/// ordered by player name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsSummary {
    pub rows: Vec<PlayerPoints>,
}

impl PointsSummary {
    /// Group the log by player and aggregate points (mean/max/min, one decimal)
    pub fn compute(log: &GameLog) -> Result<Self> {
        profiling::scope!("PointsSummary::compute");

        let points = || col(POINTS).cast(DataType::Float64);
        let grouped = log
            .dataframe()
            .clone()
            .lazy()
            .filter(col(PLAYER).is_not_null())
            .group_by([col(PLAYER)])
            .agg([
                points().count().alias("Games"),
                points().mean().alias("Avg"),
                points().max().alias("Max"),
                points().min().alias("Min"),
            ])
            .sort([PLAYER], SortMultipleOptions::default())
            .collect()?;

        let players = grouped.column(PLAYER)?.as_materialized_series().str()?;
        let games = float_column(&grouped, "Games")?;
        let avg = float_column(&grouped, "Avg")?;
        let max = float_column(&grouped, "Max")?;
        let min = float_column(&grouped, "Min")?;

        let rows = players
            .into_iter()
            .enumerate()
            .map(|(i, player)| PlayerPoints {
                player: player.unwrap_or_default().to_string(),
                games: games[i] as usize,
                avg: round1(avg[i]),
                max: round1(max[i]),
                min: round1(min[i]),
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated rendering for the clipboard
    pub fn to_tsv(&self) -> String {
        std::iter::once("Player\tAvg\tMax\tMin".to_string())
            .chain(self.rows.iter().map(|row| {
                format!("{}\t{:.1}\t{:.1}\t{:.1}", row.player, row.avg, row.max, row.min)
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn float_column(frame: &DataFrame, name: &str) -> Result<Vec<f64>> {
    Ok(frame
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .map(|opt| opt.unwrap_or(f64::NAN))
        .collect())
}

/// Round to one decimal place, ties to even
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
