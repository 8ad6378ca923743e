#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analysis;
mod app;
mod config;
mod constants;
mod data;
mod error;
mod perf;
mod state;
mod ui;
mod widgets;

use app::HitOxide;
use config::ExplorerConfig;

/// Serve puffin frames to an external `puffin_viewer`
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
            tracing::warn!(error = %e, "could not start puffin server");
            None
        }
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hit_oxide=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let config = ExplorerConfig::load_or_default(Path::new(constants::config::CONFIG_FILE));
    let mut app = HitOxide::new(config);

    // Optional dataset path as the first argument
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        app.open(path);
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "HitOxide - Music Hit Explorer",
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
}
