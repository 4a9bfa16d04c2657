//! UI interaction state

use crate::gif::GifImage;
use egui::load::Bytes;

/// What the GIF panel is showing
#[derive(Clone)]
pub enum GifOutcome {
    Loaded {
        player: String,
        uri: String,
        bytes: Bytes,
    },
    NotFound,
}

/// GIF selectbox value and the result of the last "Load GIF"
#[derive(Clone, Default)]
pub struct GifPanelState {
    /// Player chosen in the selectbox
    pub player: String,

    /// Last outcome; None until the button is first pressed
    pub outcome: Option<GifOutcome>,

    /// Incremented per load so each download gets a fresh image URI
    pub load_count: u64,
}

impl GifPanelState {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            ..Self::default()
        }
    }

    /// Record a lookup result. Returns the URI of the image it replaces, which
    /// the caller should evict from the egui image cache.
    pub fn record(&mut self, image: Option<GifImage>) -> Option<String> {
        self.load_count += 1;
        let previous = self.loaded_uri().map(str::to_string);

        self.outcome = Some(match image {
            Some(image) => GifOutcome::Loaded {
                uri: format!("bytes://gif/{}-{}.gif", self.load_count, slug(&image.player)),
                player: image.player,
                bytes: image.bytes.into(),
            },
            None => GifOutcome::NotFound,
        });

        previous
    }

    pub fn loaded_uri(&self) -> Option<&str> {
        match &self.outcome {
            Some(GifOutcome::Loaded { uri, .. }) => Some(uri),
            _ => None,
        }
    }
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

/// UI state: status messages, list search, GIF panel
#[derive(Clone, Default)]
pub struct UiState {
    /// Error message to display in UI (status line)
    pub error_message: Option<String>,

    /// Info message (e.g. export finished)
    pub info_message: Option<String>,

    /// Search text narrowing the player list
    pub player_search: String,

    pub gif: GifPanelState,
}

impl UiState {
    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.info_message = None;
        self.error_message = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.error_message = None;
        self.info_message = Some(message.into());
    }

    /// Clear status messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(player: &str) -> GifImage {
        GifImage {
            player: player.to_string(),
            url: "https://media.giphy.com/x.gif".to_string(),
            bytes: b"GIF89a".to_vec(),
        }
    }

    #[test]
    fn test_record_loaded_then_not_found() {
        let mut panel = GifPanelState::new("LeBron James");

        assert_eq!(panel.record(Some(image("LeBron James"))), None);
        assert_eq!(panel.loaded_uri(), Some("bytes://gif/1-lebron-james.gif"));

        let evicted = panel.record(None);
        assert_eq!(evicted.as_deref(), Some("bytes://gif/1-lebron-james.gif"));
        assert!(matches!(panel.outcome, Some(GifOutcome::NotFound)));
        assert_eq!(panel.loaded_uri(), None);
    }

    #[test]
    fn test_reload_gets_fresh_uri() {
        let mut panel = GifPanelState::new("LeBron James");
        panel.record(Some(image("LeBron James")));
        let evicted = panel.record(Some(image("LeBron James")));

        assert_eq!(evicted.as_deref(), Some("bytes://gif/1-lebron-james.gif"));
        assert_eq!(panel.loaded_uri(), Some("bytes://gif/2-lebron-james.gif"));
    }

    #[test]
    fn test_messages_replace_each_other() {
        let mut ui = UiState::default();
        ui.set_error("export failed");
        ui.set_info("exported 12 rows");
        assert!(ui.error_message.is_none());
        assert_eq!(ui.info_message.as_deref(), Some("exported 12 rows"));
        ui.clear_messages();
        assert!(ui.info_message.is_none());
    }
}
