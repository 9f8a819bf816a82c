use std::path::PathBuf;

use iced::widget::{Space, button, column, container, image, row, scrollable, text};
use iced::{Element, Length};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const CARDS_PER_ROW: usize = 3;
const CARD_SPACING: f32 = 12.0;
const CARD_PADDING: f32 = 8.0;
const CARD_IMAGE_HEIGHT: f32 = 220.0;

/// Display payload for one grid card.
#[derive(Debug, Clone)]
pub(crate) struct ProductCard {
    pub(crate) slug: String,
    pub(crate) name: String,
    pub(crate) price: String,
    pub(crate) image_path: Option<String>,
}

/// UI events emitted by the product grid.
#[derive(Debug, Clone)]
pub(crate) enum ProductGridEvent {
    ProductPressed { slug: String },
}

/// Props for rendering the product grid.
pub(crate) struct ProductGridProps<'a> {
    pub(crate) cards: Vec<ProductCard>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the product cards in fixed-width rows.
pub(crate) fn view<'a>(
    props: ProductGridProps<'a>,
) -> Element<'a, ProductGridEvent> {
    if props.cards.is_empty() {
        let palette = *props.theme.theme.palette();
        return container(
            text("No products match the current filters.")
                .size(props.fonts.ui.size)
                .color(palette.dim_foreground),
        )
        .width(Length::Fill)
        .padding(CARD_SPACING)
        .into();
    }

    let mut rows = column![].spacing(CARD_SPACING);
    for chunk in props.cards.chunks(CARDS_PER_ROW) {
        let mut cards_row = row![].spacing(CARD_SPACING);
        for card in chunk {
            cards_row = cards_row.push(card_view(card, &props));
        }
        rows = rows.push(cards_row);
    }

    scrollable(container(rows).padding(CARD_SPACING))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card_view<'a>(
    card: &ProductCard,
    props: &ProductGridProps<'a>,
) -> Element<'a, ProductGridEvent> {
    let palette = *props.theme.theme.palette();

    let picture: Element<'a, ProductGridEvent> = match &card.image_path {
        Some(path) => image(PathBuf::from(path))
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
        None => container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .style(move |_| iced::widget::container::Style {
                background: Some(palette.border.into()),
                ..Default::default()
            })
            .into(),
    };

    let name = text(card.name.clone()).size(props.fonts.ui.size);
    let price = text(card.price.clone())
        .size(props.fonts.ui.size)
        .color(palette.dim_foreground);

    let slug = card.slug.clone();
    button(
        column![picture, name, price]
            .spacing(CARD_PADDING)
            .width(Length::Fill),
    )
    .style(button::text)
    .padding(CARD_PADDING)
    .width(Length::FillPortion(1))
    .on_press(ProductGridEvent::ProductPressed { slug })
    .into()
}
