use iced::widget::{button, column, container, mouse_area, text};
use iced::{Element, Length};
use vetra_catalog::Category;

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

pub(crate) const PANEL_WIDTH: f32 = 180.0;
const PANEL_PADDING: f32 = 10.0;
const ITEM_SPACING: f32 = 2.0;

/// UI events emitted by the category hover panel.
#[derive(Debug, Clone)]
pub(crate) enum CategoryPanelEvent {
    PointerEntered,
    PointerExited,
    CategoryPressed { slug: Option<String> },
}

/// Props for rendering the category hover panel.
pub(crate) struct CategoryPanelProps<'a> {
    pub(crate) categories: &'a [Category],
    pub(crate) selected: Option<&'a str>,
    pub(crate) open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the category panel; the list unfolds while hovered.
pub(crate) fn view<'a>(
    props: CategoryPanelProps<'a>,
) -> Element<'a, CategoryPanelEvent> {
    let palette = *props.theme.theme.palette();

    let header = text("Categories")
        .font(props.fonts.heading.font_type)
        .size(props.fonts.ui.size);

    let mut content = column![header].spacing(ITEM_SPACING);

    if props.open {
        content = content.push(category_button(
            "All products",
            props.selected.is_none(),
            props.fonts,
            CategoryPanelEvent::CategoryPressed { slug: None },
        ));

        for category in props.categories {
            let is_active = props.selected == Some(category.slug.as_str());
            content = content.push(category_button(
                &category.name,
                is_active,
                props.fonts,
                CategoryPanelEvent::CategoryPressed {
                    slug: Some(category.slug.clone()),
                },
            ));
        }
    }

    let panel = container(content)
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
        .on_enter(CategoryPanelEvent::PointerEntered)
        .on_exit(CategoryPanelEvent::PointerExited)
        .into()
}

fn category_button<'a>(
    label: &str,
    is_active: bool,
    fonts: &FontsConfig,
    on_press: CategoryPanelEvent,
) -> Element<'a, CategoryPanelEvent> {
    let style = if is_active {
        button::primary
    } else {
        button::text
    };

    button(text(String::from(label)).size(fonts.ui.size))
        .width(Length::Fill)
        .style(style)
        .on_press(on_press)
        .into()
}
