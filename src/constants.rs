//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Dataset layout and selection defaults
pub mod dataset {
    /// Default dataset location, relative to the working directory
    pub const DEFAULT_DATA_PATH: &str = "final_df.csv";

    /// Player seeded into the default selections
    pub const ANCHOR_PLAYER: &str = "LeBron James";

    /// How many other players (alphabetical) join the anchor by default
    pub const DEFAULT_EXTRA_PLAYERS: usize = 2;

    /// Rows sampled for CSV schema inference
    pub const INFER_SCHEMA_ROWS: usize = 1000;

    /// Columns the input file must provide
    pub const REQUIRED_COLUMNS: [&str; 11] = [
        super::columns::GAME_DATE,
        super::columns::FIRST_NAME,
        super::columns::LAST_NAME,
        super::columns::PLAYER_TEAM,
        super::columns::OPPONENT_TEAM,
        super::columns::POINTS,
        super::columns::ASSISTS,
        super::columns::REBOUNDS,
        super::columns::MINUTES,
        super::columns::TURNOVERS,
        super::columns::PLUS_MINUS,
    ];
}

/// Column names, both source and derived
pub mod columns {
    pub const GAME_DATE: &str = "gameDate";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PLAYER_TEAM: &str = "playerteamName";
    pub const OPPONENT_TEAM: &str = "opponentteamName";
    pub const POINTS: &str = "points";
    pub const ASSISTS: &str = "assists";
    pub const REBOUNDS: &str = "reboundsTotal";
    pub const MINUTES: &str = "numMinutes";
    pub const TURNOVERS: &str = "turnovers";
    pub const PLUS_MINUS: &str = "plusMinusPoints";

    pub const PLAYER: &str = "Player";
    pub const TEAM: &str = "Team";
    pub const OPPONENT: &str = "Opponent";
    pub const GAME_DATE_ONLY: &str = "gameDate_only";

    /// Correlation features, in heatmap order
    pub const FEATURES: [&str; 6] = [POINTS, ASSISTS, REBOUNDS, MINUTES, TURNOVERS, PLUS_MINUS];

    /// Columns shown in the raw filtered data table
    pub const RAW_TABLE: [&str; 5] = [GAME_DATE, PLAYER, POINTS, TEAM, OPPONENT];
}

/// GIF search defaults
pub mod gif {
    pub const DEFAULT_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/search";

    /// Appended to the player name to build the search query
    pub const DEFAULT_QUERY_SUFFIX: &str = " playoffs nba";

    pub const DEFAULT_RATING: &str = "pg";

    /// Key under `images` holding the rendition to download
    pub const DEFAULT_RENDITION: &str = "downsized";

    pub const RESULT_LIMIT: u32 = 1;

    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Environment variable holding the API key
    pub const API_KEY_VAR: &str = "GIPHY_API_KEY";

    /// Sidebar image width
    pub const SIDEBAR_WIDTH: f32 = 300.0;
}

/// Plotting and visualization defaults
pub mod plot {
    /// Marker radius on the points line chart
    pub const MARKER_RADIUS: f32 = 3.5;

    /// Heatmap cell edge length
    pub const HEATMAP_CELL: f32 = 72.0;

    /// Heatmap row/column label gutter
    pub const HEATMAP_LABEL_WIDTH: f32 = 120.0;

    pub const LINE_CHART_MIN_HEIGHT: f32 = 320.0;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (sidebar) default width
    pub const SIDEBAR_WIDTH: f32 = 340.0;

    /// Player list scroll height
    pub const PLAYER_LIST_HEIGHT: f32 = 220.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;

    /// Raw data table maximum height
    pub const RAW_TABLE_HEIGHT: f32 = 280.0;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "playoff-dashboard.json";

    /// Environment override for the dataset path
    pub const DATA_PATH_VAR: &str = "PLAYOFF_DATA_PATH";
}
