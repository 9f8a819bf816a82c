mod app;
mod config;
mod features;
mod fonts;
mod helpers;
mod state;
mod theme;
mod ui;

use iced::Size;

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        })
        .subscription(App::subscription)
        .run()
}
