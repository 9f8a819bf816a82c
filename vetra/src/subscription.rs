use iced::{Subscription, window};

use crate::app::{App, Event};

pub(super) fn subscription(_app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));
    let key_subs = iced::keyboard::listen().map(Event::Keyboard);

    Subscription::batch(vec![win_subs, key_subs])
}
