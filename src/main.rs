use iced::window::{self, Level};
use iced::{Application, Settings, Size};
use tracing_subscriber::EnvFilter;

use temp_widget::app::TempWidget;
use temp_widget::config::AppConfig;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut settings = Settings::with_flags(AppConfig::from_env());
    settings.window = window::Settings {
        size: Size::new(340.0, 200.0),
        resizable: false,
        level: Level::AlwaysOnTop,
        ..window::Settings::default()
    };
    TempWidget::run(settings)
}
