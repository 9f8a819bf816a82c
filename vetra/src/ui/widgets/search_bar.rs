use iced::widget::{button, row, text, text_input};
use iced::{Element, Length};

use crate::fonts::FontsConfig;

const BAR_SPACING: f32 = 8.0;

/// UI events emitted by the search bar.
#[derive(Debug, Clone)]
pub(crate) enum SearchBarEvent {
    InputChanged { value: String },
    Submitted,
}

/// Props for rendering the search bar.
pub(crate) struct SearchBarProps<'a> {
    pub(crate) value: &'a str,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the search input with its submit button.
pub(crate) fn view<'a>(props: SearchBarProps<'a>) -> Element<'a, SearchBarEvent> {
    let input = text_input("Search products...", props.value)
        .size(props.fonts.ui.size)
        .on_input(|value| SearchBarEvent::InputChanged { value })
        .on_submit(SearchBarEvent::Submitted)
        .width(Length::Fill);

    let submit = button(text("Search").size(props.fonts.ui.size))
        .style(button::primary)
        .on_press(SearchBarEvent::Submitted);

    row![input, submit].spacing(BAR_SPACING).width(Length::Fill).into()
}
