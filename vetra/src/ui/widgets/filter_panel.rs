use std::collections::{BTreeMap, BTreeSet};

use iced::widget::{
    Space, button, checkbox, column, container, mouse_area, row, scrollable,
    text, text_input,
};
use iced::{Element, Length};
use vetra_catalog::{
    AttributeKind, AttributeSchema, FeatureValue, color_family, family_hex,
};

use crate::fonts::FontsConfig;
use crate::helpers::format_label;
use crate::theme::{ThemeProps, color_from_hex};

pub(crate) const PANEL_WIDTH: f32 = 180.0;
const PANEL_PADDING: f32 = 10.0;
const SECTION_SPACING: f32 = 10.0;
const ITEM_SPACING: f32 = 4.0;
const SWATCH_SIZE: f32 = 12.0;

/// UI events emitted by the filter hover panel.
#[derive(Debug, Clone)]
pub(crate) enum FilterPanelEvent {
    PointerEntered,
    PointerExited,
    ColorToggled { color: String },
    SizeToggled { size: String },
    BrightnessToggled { value: String },
    MinPriceChanged { value: String },
    MaxPriceChanged { value: String },
    FeatureToggled { key: String, value: FeatureValue },
    ClearPressed,
}

/// Props for rendering the filter hover panel.
pub(crate) struct FilterPanelProps<'a> {
    pub(crate) open: bool,
    pub(crate) colors: Vec<String>,
    pub(crate) selected_colors: &'a BTreeSet<String>,
    pub(crate) sizes: Vec<String>,
    pub(crate) selected_sizes: &'a BTreeSet<String>,
    pub(crate) brightness: Vec<String>,
    pub(crate) selected_brightness: &'a BTreeSet<String>,
    pub(crate) min_price: &'a str,
    pub(crate) max_price: &'a str,
    pub(crate) attributes: &'a [AttributeSchema],
    pub(crate) selected_features: &'a BTreeMap<String, Vec<FeatureValue>>,
    pub(crate) has_active: bool,
    /// Height cap of the unfolded panel, derived from the screen size.
    pub(crate) max_height: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the filter panel; sections unfold while hovered.
pub(crate) fn view<'a>(
    props: FilterPanelProps<'a>,
) -> Element<'a, FilterPanelEvent> {
    let palette = *props.theme.theme.palette();

    let header = text("Filters")
        .font(props.fonts.heading.font_type)
        .size(props.fonts.ui.size);

    let mut content = column![header].spacing(SECTION_SPACING);

    if props.open {
        content = content
            .push(color_section(&props))
            .push(size_section(&props))
            .push(price_section(&props));

        if !props.brightness.is_empty() {
            content = content.push(brightness_section(&props));
        }
        if !props.attributes.is_empty() {
            content = content.push(attribute_sections(&props));
        }
        if props.has_active {
            content = content.push(
                button(text("Clear filters").size(props.fonts.ui.size))
                    .style(button::secondary)
                    .on_press(FilterPanelEvent::ClearPressed),
            );
        }
    }

    let body: Element<'a, FilterPanelEvent> = if props.open {
        scrollable(content)
            .height(Length::Fixed(props.max_height))
            .into()
    } else {
        content.into()
    };

    let panel = container(body)
        .width(Length::Fixed(PANEL_WIDTH))
        .padding(PANEL_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            border: iced::Border {
                color: palette.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

    mouse_area(panel)
        .on_enter(FilterPanelEvent::PointerEntered)
        .on_exit(FilterPanelEvent::PointerExited)
        .into()
}

fn color_section<'a>(
    props: &FilterPanelProps<'a>,
) -> Element<'a, FilterPanelEvent> {
    let mut section = column![section_title("Color", props.fonts)]
        .spacing(ITEM_SPACING);

    for color in &props.colors {
        let value = color.to_lowercase();
        let checked = props.selected_colors.contains(&value);
        let entry = checkbox(checked)
            .label(color.clone())
            .size(props.fonts.ui.size)
            .on_toggle(move |_| FilterPanelEvent::ColorToggled {
                color: value.clone(),
            });

        let line = match swatch(color) {
            Some(swatch) => row![swatch, entry]
                .spacing(ITEM_SPACING)
                .align_y(iced::alignment::Vertical::Center)
                .into(),
            None => Element::from(entry),
        };
        section = section.push(line);
    }

    section.into()
}

fn size_section<'a>(
    props: &FilterPanelProps<'a>,
) -> Element<'a, FilterPanelEvent> {
    let mut section =
        column![section_title("Size", props.fonts)].spacing(ITEM_SPACING);

    for size in &props.sizes {
        let checked = props.selected_sizes.contains(size);
        let value = size.clone();
        section = section.push(
            checkbox(checked)
                .label(size.clone())
                .size(props.fonts.ui.size)
                .on_toggle(move |_| FilterPanelEvent::SizeToggled {
                    size: value.clone(),
                }),
        );
    }

    section.into()
}

fn brightness_section<'a>(
    props: &FilterPanelProps<'a>,
) -> Element<'a, FilterPanelEvent> {
    let mut section = column![section_title("Brightness", props.fonts)]
        .spacing(ITEM_SPACING);

    for value in &props.brightness {
        let checked = props.selected_brightness.contains(value);
        let toggled = value.clone();
        section = section.push(
            checkbox(checked)
                .label(value.clone())
                .size(props.fonts.ui.size)
                .on_toggle(move |_| FilterPanelEvent::BrightnessToggled {
                    value: toggled.clone(),
                }),
        );
    }

    section.into()
}

fn price_section<'a>(
    props: &FilterPanelProps<'a>,
) -> Element<'a, FilterPanelEvent> {
    let min_input = text_input("Min", props.min_price)
        .size(props.fonts.ui.size)
        .on_input(|value| FilterPanelEvent::MinPriceChanged { value });
    let max_input = text_input("Max", props.max_price)
        .size(props.fonts.ui.size)
        .on_input(|value| FilterPanelEvent::MaxPriceChanged { value });

    column![
        section_title("Price", props.fonts),
        row![min_input, max_input].spacing(ITEM_SPACING),
    ]
    .spacing(ITEM_SPACING)
    .into()
}

fn attribute_sections<'a>(
    props: &FilterPanelProps<'a>,
) -> Element<'a, FilterPanelEvent> {
    let mut sections = column![].spacing(SECTION_SPACING);

    for attribute in props.attributes {
        let title = attribute
            .label
            .clone()
            .unwrap_or_else(|| format_label(&attribute.key));
        let mut section = column![section_title(&title, props.fonts)]
            .spacing(ITEM_SPACING);

        let values: Vec<(String, FeatureValue)> = match attribute.kind {
            AttributeKind::Boolean => vec![
                (String::from("Yes"), FeatureValue::Bool(true)),
                (String::from("No"), FeatureValue::Bool(false)),
            ],
            AttributeKind::Select | AttributeKind::Text => attribute
                .options
                .iter()
                .map(|option| {
                    (option.clone(), FeatureValue::Text(option.clone()))
                })
                .collect(),
        };

        for (label, value) in values {
            let selected = props
                .selected_features
                .get(&attribute.key)
                .is_some_and(|chosen| chosen.contains(&value.normalized()));
            let key = attribute.key.clone();
            section = section.push(
                checkbox(selected).label(label).size(props.fonts.ui.size).on_toggle(
                    move |_| FilterPanelEvent::FeatureToggled {
                        key: key.clone(),
                        value: value.clone(),
                    },
                ),
            );
        }

        sections = sections.push(section);
    }

    sections.into()
}

fn section_title<'a>(
    label: &str,
    fonts: &FontsConfig,
) -> Element<'a, FilterPanelEvent> {
    text(String::from(label))
        .font(fonts.heading.font_type)
        .size(fonts.ui.size * 0.9)
        .into()
}

/// Colored square hinting at the color family of a swatch entry.
fn swatch<'a>(color: &str) -> Option<Element<'a, FilterPanelEvent>> {
    let family = color_family(color);
    let fill = family_hex(&family).and_then(color_from_hex)?;

    Some(
        container(Space::new())
            .width(Length::Fixed(SWATCH_SIZE))
            .height(Length::Fixed(SWATCH_SIZE))
            .style(move |_| iced::widget::container::Style {
                background: Some(fill.into()),
                border: iced::Border {
                    color: iced::Color::BLACK,
                    width: 0.5,
                    radius: 2.0.into(),
                },
                ..Default::default()
            })
            .into(),
    )
}
