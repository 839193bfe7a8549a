use iced::Size;
use tracing_subscriber::EnvFilter;

use movie_explorer::app::State;
use movie_explorer::config;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();
    let window_size = Size::new(config.window.width, config.window.height);

    tracing::info!("Starting Movie Explorer");

    iced::application(move || State::new(config.clone()), State::update, State::view)
        .title(State::title)
        .theme(State::theme)
        .window_size(window_size)
        .run()
}
