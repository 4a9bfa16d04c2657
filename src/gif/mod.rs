//! Celebratory GIF lookup
//!
//! One search request, then one download of the first result's rendition.
//! Every failure along the way collapses to `None` for the caller; the cause
//! is logged at warn level and nothing is cached or retried.

mod transport;

pub use transport::{GifTransport, ReqwestTransport};

use crate::config::{ApiKey, GifSettings};
use crate::constants::gif::RESULT_LIMIT;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Why a lookup produced nothing. Internal: callers only see `None`.
#[derive(Error, Debug)]
pub enum GifError {
    #[error("search returned HTTP {0}")]
    Status(u16),

    #[error("no GIFs found")]
    NoResults,

    #[error("first result has no '{0}' rendition URL")]
    MissingRendition(String),

    #[error("image download returned HTTP {0}")]
    DownloadStatus(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid search response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A downloaded GIF
#[derive(Debug, Clone, PartialEq)]
pub struct GifImage {
    pub player: String,
    pub url: String,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    images: Value,
}

pub struct GifFetcher<T: GifTransport = ReqwestTransport> {
    transport: T,
    api_key: ApiKey,
    settings: GifSettings,
}

impl GifFetcher<ReqwestTransport> {
    /// Fetcher over a real HTTP client using the configured timeout
    pub fn connect(api_key: ApiKey, settings: GifSettings) -> Result<Self, GifError> {
        let transport = ReqwestTransport::new(Duration::from_secs(settings.timeout_secs))?;
        Ok(Self::new(transport, api_key, settings))
    }
}

impl<T: GifTransport> GifFetcher<T> {
    pub fn new(transport: T, api_key: ApiKey, settings: GifSettings) -> Self {
        Self {
            transport,
            api_key,
            settings,
        }
    }

    /// Search text sent for `player`
    pub fn search_query(&self, player: &str) -> String {
        format!("{}{}", player, self.settings.query_suffix)
    }

    /// Look up and download a GIF for `player`. `None` means "No GIF found."
    pub fn fetch(&self, player: &str) -> Option<GifImage> {
        profiling::scope!("GifFetcher::fetch");

        match self.try_fetch(player) {
            Ok(image) => {
                tracing::info!(player, url = %image.url, bytes = image.bytes.len(), "loaded GIF");
                Some(image)
            }
            Err(e) => {
                tracing::warn!(player, error = %e, "GIF lookup failed");
                None
            }
        }
    }

    fn try_fetch(&self, player: &str) -> Result<GifImage, GifError> {
        let query = self.search_query(player);
        let limit = RESULT_LIMIT.to_string();
        let params = [
            ("api_key", self.api_key.expose()),
            ("q", query.as_str()),
            ("limit", limit.as_str()),
            ("rating", self.settings.rating.as_str()),
        ];

        let search = self.transport.get(&self.settings.endpoint, &params)?;
        if !search.is_success() {
            return Err(GifError::Status(search.status));
        }

        let url = extract_gif_url(&search.body, &self.settings.rendition)?;
        tracing::debug!(player, %url, "downloading GIF");

        let download = self.transport.get(&url, &[])?;
        if !download.is_success() {
            return Err(GifError::DownloadStatus(download.status));
        }

        Ok(GifImage {
            player: player.to_string(),
            url,
            bytes: download.body,
        })
    }
}

/// Pull `data[0].images.<rendition>.url` out of a search response body
pub fn extract_gif_url(body: &[u8], rendition: &str) -> Result<String, GifError> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    let first = response.data.into_iter().next().ok_or(GifError::NoResults)?;

    first
        .images
        .get(rendition)
        .and_then(|r| r.get("url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GifError::MissingRendition(rendition.to_string()))
}
