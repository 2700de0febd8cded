mod app;
mod breakpoint;
mod components;
mod config;
mod dismiss;
mod generation;
mod geometry;
mod guards;
mod layout;
mod routers;
mod theme;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, INITIAL_WINDOW_SIZE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::ConfigStatus;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let load = config::load();
    match load.status {
        ConfigStatus::Loaded => {
            log::info!("loaded shell config from {}", load.path.display());
        },
        ConfigStatus::Missing => {
            log::info!(
                "no shell config at {}, using defaults",
                load.path.display()
            );
        },
        ConfigStatus::Invalid => {},
    }
    if load.config.token.is_none() {
        log::info!("no API token configured; starting signed out");
    }
    let config = load.config;

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: INITIAL_WINDOW_SIZE,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
