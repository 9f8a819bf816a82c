use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

pub(crate) const ACTION_BAR_HEIGHT: f32 = 52.0;
const ACTION_BAR_PADDING: f32 = 12.0;
const ACTION_SPACING: f32 = 8.0;

/// UI events emitted by the action bar.
#[derive(Debug, Clone)]
pub(crate) enum ActionBarEvent {
    HomePressed,
    CartPressed,
}

/// Props for rendering the top action bar.
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) cart_count: u32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the storefront header with navigation and the cart badge.
pub(crate) fn view<'a>(
    props: ActionBarProps<'a>,
) -> Element<'a, ActionBarEvent> {
    let palette = *props.theme.theme.palette();

    let title = text(props.title)
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);

    let shop_button = button(
        text("Shop").size(props.fonts.ui.size),
    )
    .style(button::text)
    .on_press(ActionBarEvent::HomePressed);

    let cart_label = if props.cart_count > 0 {
        format!("Cart ({})", props.cart_count)
    } else {
        String::from("Cart")
    };
    let cart_button = button(text(cart_label).size(props.fonts.ui.size))
        .style(button::primary)
        .on_press(ActionBarEvent::CartPressed);

    let content = row![
        title,
        Space::new().width(Length::Fill),
        shop_button,
        cart_button,
    ]
    .spacing(ACTION_SPACING)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .padding(ACTION_BAR_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            ..Default::default()
        })
        .into()
}
