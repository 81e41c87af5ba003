use iced::{Application, Settings, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod ui;

use app::ArticleApp;
use config::ViewerConfig;

fn main() -> iced::Result {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,article_params=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting article viewer v{}", env!("CARGO_PKG_VERSION"));

    let config = ViewerConfig::from_env();

    ArticleApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(1440.0, 900.0),
            min_size: Some(Size::new(960.0, 640.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })
}
