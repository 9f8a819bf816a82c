use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const PAGE_PADDING: f32 = 16.0;
const LINE_SPACING: f32 = 8.0;

/// Display payload for one cart row.
#[derive(Debug, Clone)]
pub(crate) struct CartRow {
    pub(crate) description: String,
    pub(crate) quantity: u32,
    pub(crate) total: String,
}

/// UI events emitted by the cart page.
#[derive(Debug, Clone)]
pub(crate) enum CartPageEvent {
    ClearPressed,
    ContinuePressed,
}

/// Props for rendering the cart page.
pub(crate) struct CartPageProps<'a> {
    pub(crate) rows: Vec<CartRow>,
    pub(crate) total: String,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the cart contents with totals and actions.
pub(crate) fn view<'a>(props: CartPageProps<'a>) -> Element<'a, CartPageEvent> {
    let palette = *props.theme.theme.palette();

    let heading = text("Your cart")
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);

    let mut content = column![heading].spacing(LINE_SPACING);

    if props.rows.is_empty() {
        content = content.push(
            text("Your cart is empty.")
                .size(props.fonts.ui.size)
                .color(palette.dim_foreground),
        );
    } else {
        for line in props.rows {
            content = content.push(
                row![
                    text(format!(
                        "{} \u{00d7} {}",
                        line.quantity, line.description
                    ))
                    .size(props.fonts.ui.size),
                    Space::new().width(Length::Fill),
                    text(line.total.clone()).size(props.fonts.ui.size),
                ]
                .width(Length::Fill),
            );
        }

        content = content.push(
            row![
                text("Total")
                    .font(props.fonts.heading.font_type)
                    .size(props.fonts.ui.size),
                Space::new().width(Length::Fill),
                text(props.total.clone())
                    .font(props.fonts.heading.font_type)
                    .size(props.fonts.ui.size),
            ]
            .width(Length::Fill),
        );

        content = content.push(
            button(text("Clear cart").size(props.fonts.ui.size))
                .style(button::danger)
                .on_press(CartPageEvent::ClearPressed),
        );
    }

    content = content.push(
        button(text("Continue shopping").size(props.fonts.ui.size))
            .style(button::secondary)
            .on_press(CartPageEvent::ContinuePressed),
    );

    scrollable(container(content).padding(PAGE_PADDING))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
