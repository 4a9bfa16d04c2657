//! HTTP seam for the GIF lookup

use super::GifError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Status and body of a completed GET
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET with query parameters. One attempt, no retry.
pub trait GifTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, GifError>;
}

/// Production transport over a blocking reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, GifError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GifError::Transport(format!("failed to build http client: {}", e)))?;
        Ok(Self { client })
    }
}

impl GifTransport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, GifError> {
        // Error text must not echo the URL: it carries the API key
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| GifError::Transport(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| GifError::Transport(e.without_url().to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = HttpResponse { status: 200, body: Vec::new() };
        let no_content = HttpResponse { status: 204, body: Vec::new() };
        let forbidden = HttpResponse { status: 403, body: Vec::new() };
        let server = HttpResponse { status: 500, body: Vec::new() };

        assert!(ok.is_success());
        assert!(no_content.is_success());
        assert!(!forbidden.is_success());
        assert!(!server.is_success());
    }
}
