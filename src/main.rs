#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod constants;
mod dashboard;
mod data;
mod error;
mod gif;
mod state;
mod ui;
mod widgets;

use app::DashboardApp;
use config::{ApiKey, Settings};
use data::GameLog;
use gif::GifFetcher;
use state::AppState;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,playoff_dashboard=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            tracing::info!(%addr, "puffin server listening");
            Some(server)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to start puffin server");
            None
        }
    }
}

/// Resolve the GIF key and client; the error string is shown in the GIF panel
fn connect_gifs(settings: &Settings) -> Result<GifFetcher, String> {
    let key = ApiKey::from_env(|var| std::env::var(var).ok()).map_err(|e| {
        tracing::error!(error = %e, "GIF lookups disabled");
        e.user_message()
    })?;

    GifFetcher::connect(key, settings.gif.clone()).map_err(|e| {
        tracing::error!(error = %e, "GIF client unavailable");
        format!("GIF client unavailable: {}", e)
    })
}

fn main() -> eframe::Result {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    init_logging();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "ignoring unreadable config, using defaults");
        Settings::default()
    });
    tracing::debug!(?settings, "resolved settings");

    let data = GameLog::load(&settings.data_path);
    if let Err(e) = &data {
        tracing::error!(path = %settings.data_path.display(), error = %e, "failed to load game log");
    }

    let gif_fetcher = connect_gifs(&settings);
    let state = AppState::new(settings, data, gif_fetcher);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("NBA Playoffs Dashboard")
            .with_inner_size([1400.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NBA Playoffs Dashboard",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(state)))
        }),
    )
}
