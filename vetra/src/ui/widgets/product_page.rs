use std::path::PathBuf;

use iced::widget::{
    Space, button, column, container, image, row, scrollable, text,
};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const PAGE_SPACING: f32 = 16.0;
const GALLERY_WIDTH: f32 = 420.0;
const MAIN_IMAGE_HEIGHT: f32 = 420.0;
const THUMBNAIL_SIZE: f32 = 56.0;
const OPTION_SPACING: f32 = 6.0;

/// UI events emitted by the product page.
#[derive(Debug, Clone)]
pub(crate) enum ProductPageEvent {
    PreviousImagePressed,
    NextImagePressed,
    ThumbnailPressed { index: usize },
    ColorPressed { color: String },
    SizePressed { size: String },
    AddToCartPressed,
}

/// Props for rendering the product page.
pub(crate) struct ProductPageProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) description: &'a str,
    pub(crate) price: String,
    pub(crate) current_image: Option<&'a str>,
    pub(crate) thumbnails: &'a [String],
    pub(crate) active_index: usize,
    pub(crate) colors: Vec<String>,
    pub(crate) selected_color: Option<&'a str>,
    pub(crate) sizes: Vec<String>,
    pub(crate) selected_size: Option<&'a str>,
    pub(crate) in_stock: bool,
    pub(crate) button_label: &'a str,
    pub(crate) button_enabled: bool,
    pub(crate) button_success: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the product page: gallery on the left, details on the right.
pub(crate) fn view<'a>(
    props: ProductPageProps<'a>,
) -> Element<'a, ProductPageEvent> {
    let gallery = gallery_view(&props);
    let details = details_view(&props);

    scrollable(
        row![gallery, details]
            .spacing(PAGE_SPACING)
            .padding(PAGE_SPACING)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn gallery_view<'a>(
    props: &ProductPageProps<'a>,
) -> Element<'a, ProductPageEvent> {
    let palette = *props.theme.theme.palette();

    // The render guard: no image, no source swap.
    let main_image: Element<'a, ProductPageEvent> = match props.current_image
    {
        Some(path) => image(PathBuf::from(path))
            .width(Length::Fill)
            .height(Length::Fixed(MAIN_IMAGE_HEIGHT))
            .into(),
        None => container(
            text("No image")
                .size(props.fonts.ui.size)
                .color(palette.dim_foreground),
        )
        .width(Length::Fill)
        .height(Length::Fixed(MAIN_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.border.into()),
            ..Default::default()
        })
        .into(),
    };

    let has_multiple = props.thumbnails.len() > 1;
    let previous = button(text("<").size(props.fonts.ui.size))
        .style(button::secondary)
        .on_press_maybe(
            has_multiple.then_some(ProductPageEvent::PreviousImagePressed),
        );
    let next = button(text(">").size(props.fonts.ui.size))
        .style(button::secondary)
        .on_press_maybe(
            has_multiple.then_some(ProductPageEvent::NextImagePressed),
        );

    let controls = row![
        previous,
        Space::new().width(Length::Fill),
        next,
    ]
    .width(Length::Fill);

    let mut thumbnails = row![].spacing(OPTION_SPACING);
    for (index, path) in props.thumbnails.iter().enumerate() {
        let style = if index == props.active_index {
            button::primary
        } else {
            button::text
        };
        thumbnails = thumbnails.push(
            button(
                image(PathBuf::from(path))
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE)),
            )
            .style(style)
            .padding(2)
            .on_press(ProductPageEvent::ThumbnailPressed { index }),
        );
    }

    column![main_image, controls, thumbnails]
        .spacing(OPTION_SPACING)
        .width(Length::Fixed(GALLERY_WIDTH))
        .into()
}

fn details_view<'a>(
    props: &ProductPageProps<'a>,
) -> Element<'a, ProductPageEvent> {
    let palette = *props.theme.theme.palette();

    let name = text(String::from(props.name))
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);
    let price = text(props.price.clone()).size(props.fonts.ui.size);

    let mut details = column![name, price].spacing(PAGE_SPACING / 2.0);

    if !props.colors.is_empty() {
        details = details.push(option_row(
            "Color",
            &props.colors,
            props.selected_color,
            props.fonts,
            |color| ProductPageEvent::ColorPressed { color },
        ));
    }

    if !props.sizes.is_empty() {
        details = details.push(option_row(
            "Size",
            &props.sizes,
            props.selected_size,
            props.fonts,
            |size| ProductPageEvent::SizePressed { size },
        ));
    }

    if props.in_stock {
        let style = if props.button_success {
            button::success
        } else {
            button::primary
        };
        details = details.push(
            button(
                text(String::from(props.button_label))
                    .size(props.fonts.ui.size),
            )
            .style(style)
            .on_press_maybe(
                props
                    .button_enabled
                    .then_some(ProductPageEvent::AddToCartPressed),
            ),
        );
    } else {
        details = details.push(
            text("Out of stock")
                .size(props.fonts.ui.size)
                .color(palette.danger),
        );
    }

    if !props.description.is_empty() {
        details = details.push(
            text(String::from(props.description))
                .size(props.fonts.ui.size)
                .color(palette.dim_foreground),
        );
    }

    details.width(Length::Fill).into()
}

fn option_row<'a>(
    label: &str,
    options: &[String],
    selected: Option<&str>,
    fonts: &'a FontsConfig,
    to_event: impl Fn(String) -> ProductPageEvent,
) -> Element<'a, ProductPageEvent> {
    let mut buttons = row![].spacing(OPTION_SPACING);
    for option in options {
        let style = if selected == Some(option.as_str()) {
            button::primary
        } else {
            button::secondary
        };
        buttons = buttons.push(
            button(text(option.clone()).size(fonts.ui.size))
                .style(style)
                .on_press(to_event(option.clone())),
        );
    }

    column![
        text(String::from(label))
            .size(fonts.ui.size * 0.9)
            .font(fonts.heading.font_type),
        buttons,
    ]
    .spacing(OPTION_SPACING / 2.0)
    .into()
}
