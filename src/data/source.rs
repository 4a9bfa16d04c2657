use crate::constants::columns::*;
use crate::constants::dataset::{INFER_SCHEMA_ROWS, REQUIRED_COLUMNS};
use crate::error::{DashError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// Days between 0001-01-01 (chrono's CE day 1) and the Unix epoch
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Date formats accepted when the CSV reader leaves `gameDate` as text
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// The playoff game log: one row per (player, game).
///
/// Wraps a polars DataFrame carrying the source columns plus the derived
/// `Player`, `Team`, `Opponent` and `gameDate_only` columns, sorted by game
/// date. Row-aligned typed copies of the columns every frame needs (player
/// name, calendar date, game time) are kept alongside so filtering and chart
/// building never re-parse the frame.
#[derive(Debug, Clone)]
pub struct GameLog {
    frame: DataFrame,
    players: Vec<Option<String>>,
    dates: Vec<NaiveDate>,
    game_times: Vec<NaiveDateTime>,
}

/// A row of the raw filtered data table
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub game_date: String,
    pub player: String,
    pub points: f64,
    pub team: String,
    pub opponent: String,
}

impl GameLog {
    /// Load the game log from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        profiling::scope!("GameLog::load");

        // polars reports a missing file as a generic compute error
        std::fs::metadata(path).map_err(|e| {
            DashError::FileIo(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;

        let raw = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_try_parse_dates(true)
            .finish()?
            .collect()?;

        let log = Self::from_raw(raw)?;
        tracing::info!(
            path = %path.display(),
            rows = log.height(),
            players = log.players().len(),
            "loaded game log"
        );
        Ok(log)
    }

    /// Build the game log from a raw frame holding the source columns
    pub fn from_raw(mut raw: DataFrame) -> Result<Self> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| raw.column(name).is_err())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DashError::MissingColumns { columns: missing });
        }
        if raw.height() == 0 {
            return Err(DashError::EmptyDataset);
        }

        let game_times = parse_game_dates(raw.column(GAME_DATE)?.as_materialized_series())?;
        raw.with_column(
            DatetimeChunked::from_naive_datetime(
                GAME_DATE.into(),
                game_times,
                TimeUnit::Milliseconds,
            )
            .into_series(),
        )?;

        let frame = raw
            .lazy()
            .with_columns([
                concat_str(
                    [
                        col(FIRST_NAME).cast(DataType::String),
                        col(LAST_NAME).cast(DataType::String),
                    ],
                    " ",
                    false,
                )
                .alias(PLAYER),
                col(PLAYER_TEAM).alias(TEAM),
                col(OPPONENT_TEAM).alias(OPPONENT),
                col(GAME_DATE).cast(DataType::Date).alias(GAME_DATE_ONLY),
            ])
            .sort(
                [GAME_DATE],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;

        Self::from_frame(frame)
    }

    /// Wrap an already-derived frame, extracting the typed row columns
    fn from_frame(frame: DataFrame) -> Result<Self> {
        let players = frame
            .column(PLAYER)?
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|name| name.map(str::to_string))
            .collect();

        let dates = frame
            .column(GAME_DATE_ONLY)?
            .as_materialized_series()
            .cast(&DataType::Int32)?
            .i32()?
            .into_iter()
            .enumerate()
            .map(|(idx, days)| {
                days.and_then(|d| NaiveDate::from_num_days_from_ce_opt(d + UNIX_EPOCH_DAYS_FROM_CE))
                    .ok_or_else(|| invalid_date(idx, days))
            })
            .collect::<Result<Vec<_>>>()?;

        let game_times = frame
            .column(GAME_DATE)?
            .as_materialized_series()
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .enumerate()
            .map(|(idx, ms)| millis_to_naive(ms).ok_or_else(|| invalid_date(idx, ms)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            frame,
            players,
            dates,
            game_times,
        })
    }

    /// Keep the rows whose mask entry is true, in order
    pub(crate) fn select_rows(&self, mask: &[bool]) -> Result<Self> {
        let keep = |idx: &usize| mask.get(*idx).copied().unwrap_or(false);
        let frame = self
            .frame
            .filter(&BooleanChunked::from_slice("mask".into(), mask))?;

        Ok(Self {
            frame,
            players: (0..self.players.len())
                .filter(keep)
                .map(|i| self.players[i].clone())
                .collect(),
            dates: (0..self.dates.len()).filter(keep).map(|i| self.dates[i]).collect(),
            game_times: (0..self.game_times.len())
                .filter(keep)
                .map(|i| self.game_times[i])
                .collect(),
        })
    }

    /// Get a reference to the underlying DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.frame
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    /// Per-row player display names (None when a name part was missing)
    pub fn player_names(&self) -> &[Option<String>] {
        &self.players
    }

    /// Per-row calendar dates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Per-row game date and time
    pub fn game_times(&self) -> &[NaiveDateTime] {
        &self.game_times
    }

    /// Distinct player names in ascending order
    pub fn players(&self) -> Vec<String> {
        self.players
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Earliest and latest calendar date, or None for an empty log
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.dates.iter().min()?;
        let max = self.dates.iter().max()?;
        Some((*min, *max))
    }

    /// Get a column's numeric values as Vec<f64>
    /// Nulls and non-numeric values become NaN
    pub fn column_as_f64(&self, name: &str) -> Result<Vec<f64>> {
        let series = self
            .frame
            .column(name)
            .map_err(|_| DashError::MissingColumns {
                columns: vec![name.to_string()],
            })?
            .as_materialized_series();

        if let Ok(cast) = series.cast(&DataType::Float64) {
            return Ok(cast
                .f64()?
                .into_iter()
                .map(|opt| opt.unwrap_or(f64::NAN))
                .collect());
        }

        // Text columns that failed to cast: parse what we can
        Ok(series
            .str()?
            .into_iter()
            .map(|opt| {
                opt.and_then(|s| s.trim().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            })
            .collect())
    }

    /// Get a column's values as display strings (nulls become empty)
    pub fn column_as_string(&self, name: &str) -> Result<Vec<String>> {
        let series = self
            .frame
            .column(name)
            .map_err(|_| DashError::MissingColumns {
                columns: vec![name.to_string()],
            })?
            .as_materialized_series()
            .cast(&DataType::String)?;

        Ok(series
            .str()?
            .into_iter()
            .map(|opt| opt.unwrap_or("").to_string())
            .collect())
    }

    /// Rows for the raw filtered data table
    pub fn raw_rows(&self) -> Result<Vec<RawRow>> {
        let points = self.column_as_f64(POINTS)?;
        let teams = self.column_as_string(TEAM)?;
        let opponents = self.column_as_string(OPPONENT)?;

        Ok(self
            .game_times
            .iter()
            .zip(&self.players)
            .zip(points)
            .zip(teams.into_iter().zip(opponents))
            .map(|(((time, player), points), (team, opponent))| RawRow {
                game_date: format_game_time(time),
                player: player.clone().unwrap_or_default(),
                points,
                team,
                opponent,
            })
            .collect())
    }

    /// Write the frame (all columns) to a CSV file
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)?;
        let mut frame = self.frame.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)?;
        Ok(())
    }
}

/// Format a game time for tables and tooltips; midnight shows as date only
pub fn format_game_time(time: &NaiveDateTime) -> String {
    if time.time() == chrono::NaiveTime::MIN {
        time.format("%Y-%m-%d").to_string()
    } else {
        time.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Normalise the `gameDate` column to date-times, whatever the CSV reader
/// inferred for it
fn parse_game_dates(series: &Series) -> Result<Vec<NaiveDateTime>> {
    match series.dtype() {
        DataType::Datetime(_, _) | DataType::Date => series
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .enumerate()
            .map(|(idx, ms)| millis_to_naive(ms).ok_or_else(|| invalid_date(idx, ms)))
            .collect(),
        _ => series
            .cast(&DataType::String)?
            .str()?
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                text.and_then(parse_game_date)
                    .ok_or_else(|| DashError::InvalidDate {
                        row: idx + 1,
                        value: text.unwrap_or("").to_string(),
                    })
            })
            .collect(),
    }
}

/// Parse a textual game date
pub fn parse_game_date(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
        })
}

fn millis_to_naive(ms: Option<i64>) -> Option<NaiveDateTime> {
    ms.and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.naive_utc())
}

fn invalid_date<T: std::fmt::Debug>(idx: usize, value: Option<T>) -> DashError {
    DashError::InvalidDate {
        row: idx + 1,
        value: value.map(|v| format!("{:?}", v)).unwrap_or_else(|| "null".to_string()),
    }
}
