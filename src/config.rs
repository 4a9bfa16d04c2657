//! Runtime configuration
//!
//! Settings come from an optional JSON file in the working directory, with a
//! small set of environment overrides. The GIF API key is only ever read from
//! the environment (a `.env` file is honoured, see `main`).

use crate::constants::{config, dataset, gif};
use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset location
    pub data_path: PathBuf,

    /// Player seeded into the default selections
    pub anchor_player: String,

    /// Number of alphabetical companions selected alongside the anchor
    pub default_extra_players: usize,

    /// GIF search options
    pub gif: GifSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(dataset::DEFAULT_DATA_PATH),
            anchor_player: dataset::ANCHOR_PLAYER.to_string(),
            default_extra_players: dataset::DEFAULT_EXTRA_PLAYERS,
            gif: GifSettings::default(),
        }
    }
}

/// GIF search endpoint and query shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifSettings {
    pub endpoint: String,
    pub query_suffix: String,
    pub rating: String,
    pub rendition: String,
    pub timeout_secs: u64,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self {
            endpoint: gif::DEFAULT_ENDPOINT.to_string(),
            query_suffix: gif::DEFAULT_QUERY_SUFFIX.to_string(),
            rating: gif::DEFAULT_RATING.to_string(),
            rendition: gif::DEFAULT_RENDITION.to_string(),
            timeout_secs: gif::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings from the default config file and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(config::CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Load settings from `path` (absent file means defaults), then apply
    /// environment overrides looked up through `env`
    pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str::<Settings>(&contents)
                .map_err(|e| DashError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Settings::default()
        };

        if let Some(data_path) = non_empty(env(config::DATA_PATH_VAR)) {
            settings.data_path = PathBuf::from(data_path);
        }

        Ok(settings)
    }
}

/// GIF API credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve the key from the environment, failing with a configuration
    /// error that names the variable when it is unset or blank
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        non_empty(env(gif::API_KEY_VAR))
            .map(ApiKey::new)
            .ok_or_else(|| DashError::MissingCredential {
                var: gif::API_KEY_VAR.to_string(),
            })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::Builder;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.json"), env_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.data_path, PathBuf::from("final_df.csv"));
        assert_eq!(settings.gif.rating, "pg");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"anchor_player": "Jayson Tatum", "gif": {{"rating": "g"}}}}"#).unwrap();
        file.flush().unwrap();

        let settings = Settings::load_from(file.path(), env_from(&[])).unwrap();
        assert_eq!(settings.anchor_player, "Jayson Tatum");
        assert_eq!(settings.gif.rating, "g");
        assert_eq!(settings.gif.query_suffix, " playoffs nba");
        assert_eq!(settings.default_extra_players, 2);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();
        file.flush().unwrap();

        let err = Settings::load_from(file.path(), env_from(&[])).unwrap_err();
        assert!(matches!(err, DashError::Config(_)));
    }

    #[test]
    fn test_env_overrides_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(
            &dir.path().join("absent.json"),
            env_from(&[("PLAYOFF_DATA_PATH", "/data/playoffs.csv")]),
        )
        .unwrap();
        assert_eq!(settings.data_path, PathBuf::from("/data/playoffs.csv"));
    }

    #[test]
    fn test_api_key_resolution() {
        let key = ApiKey::from_env(env_from(&[("GIPHY_API_KEY", " abc123 ")])).unwrap();
        assert_eq!(key.expose(), "abc123");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");

        let missing = ApiKey::from_env(env_from(&[])).unwrap_err();
        assert!(matches!(missing, DashError::MissingCredential { ref var } if var == "GIPHY_API_KEY"));

        let blank = ApiKey::from_env(env_from(&[("GIPHY_API_KEY", "   ")]));
        assert!(blank.is_err());
    }
}
