use iced::widget::{column, container, row, text};
use iced::{Element, Length, Size, Theme};
use vetra_catalog::{schema_for_category, select_display_image, sizes_for_color};

use super::{App, Event};
use crate::features::browse::BrowseEvent;
use crate::features::cart::CartEvent;
use crate::features::hover::{HoverEvent, PanelId};
use crate::features::product_detail::ProductDetailEvent;
use crate::helpers::{ellipsize, format_price};
use crate::state::Screen;
use crate::theme::ThemeProps;
use crate::ui::widgets::{
    action_bar, cart_page, category_panel, filter_panel, product_grid,
    product_page, search_bar,
};

const CONTENT_SPACING: f32 = 12.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let header = action_bar::view(action_bar::ActionBarProps {
        title: "VETRA",
        cart_count: app.features.cart().len(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {
        action_bar::ActionBarEvent::HomePressed => Event::OpenBrowse,
        action_bar::ActionBarEvent::CartPressed => Event::OpenCart,
    });

    let content: Element<'_, Event> = match app.state.screen {
        Screen::Browse => view_browse(app, theme_props),
        Screen::Product => view_product(app, theme_props),
        Screen::Cart => view_cart(app, theme_props),
    };

    column![header, content]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Browse screen: hover panels on the left, search and grid on the right.
fn view_browse<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event> {
    let browse_state = app.features.browse().state();
    let hover = app.features.hover();

    let categories = category_panel::view(category_panel::CategoryPanelProps {
        categories: &app.catalog.categories,
        selected: browse_state.category(),
        open: hover.is_open(PanelId::Category),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {
        category_panel::CategoryPanelEvent::PointerEntered => {
            Event::Hover(HoverEvent::PointerEntered {
                panel: PanelId::Category,
            })
        },
        category_panel::CategoryPanelEvent::PointerExited => {
            Event::Hover(HoverEvent::PointerExited {
                panel: PanelId::Category,
            })
        },
        category_panel::CategoryPanelEvent::CategoryPressed { slug } => {
            Event::Browse(BrowseEvent::CategorySelected { slug })
        },
    });

    let attributes = browse_state
        .category()
        .and_then(|slug| app.catalog.category(slug))
        .and_then(|category| {
            schema_for_category(&app.schemas, &category.name)
        })
        .map(|schema| schema.attributes.as_slice())
        .unwrap_or(&[]);

    let filters = filter_panel::view(filter_panel::FilterPanelProps {
        open: hover.is_open(PanelId::Filter),
        colors: app.catalog.all_colors(),
        selected_colors: browse_state.colors(),
        sizes: app.catalog.all_sizes(),
        selected_sizes: browse_state.sizes(),
        brightness: app.catalog.all_brightness_values(),
        selected_brightness: browse_state.brightness(),
        min_price: browse_state.min_price_input(),
        max_price: browse_state.max_price_input(),
        attributes,
        selected_features: browse_state.features(),
        has_active: browse_state.has_active_filters(),
        max_height: (app.state.screen_size.height * 0.7).max(240.0),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {
        filter_panel::FilterPanelEvent::PointerEntered => {
            Event::Hover(HoverEvent::PointerEntered {
                panel: PanelId::Filter,
            })
        },
        filter_panel::FilterPanelEvent::PointerExited => {
            Event::Hover(HoverEvent::PointerExited {
                panel: PanelId::Filter,
            })
        },
        filter_panel::FilterPanelEvent::ColorToggled { color } => {
            Event::Browse(BrowseEvent::ColorToggled { color })
        },
        filter_panel::FilterPanelEvent::SizeToggled { size } => {
            Event::Browse(BrowseEvent::SizeToggled { size })
        },
        filter_panel::FilterPanelEvent::BrightnessToggled { value } => {
            Event::Browse(BrowseEvent::BrightnessToggled { value })
        },
        filter_panel::FilterPanelEvent::MinPriceChanged { value } => {
            Event::Browse(BrowseEvent::MinPriceChanged { value })
        },
        filter_panel::FilterPanelEvent::MaxPriceChanged { value } => {
            Event::Browse(BrowseEvent::MaxPriceChanged { value })
        },
        filter_panel::FilterPanelEvent::FeatureToggled { key, value } => {
            Event::Browse(BrowseEvent::FeatureToggled { key, value })
        },
        filter_panel::FilterPanelEvent::ClearPressed => {
            Event::Browse(BrowseEvent::FiltersCleared)
        },
    });

    let sidebar = column![categories, filters]
        .spacing(CONTENT_SPACING)
        .width(Length::Shrink);

    let search = search_bar::view(search_bar::SearchBarProps {
        value: browse_state.search_input(),
        fonts: &app.fonts,
    })
    .map(|event| match event {
        search_bar::SearchBarEvent::InputChanged { value } => {
            Event::Browse(BrowseEvent::SearchInputChanged { value })
        },
        search_bar::SearchBarEvent::Submitted => {
            Event::Browse(BrowseEvent::SearchSubmitted)
        },
    });

    let query = browse_state.query();
    let cards: Vec<product_grid::ProductCard> = app
        .features
        .browse()
        .visible_products(&app.catalog, &app.schemas)
        .into_iter()
        .map(|product| {
            let display = select_display_image(
                product,
                &query.colors,
                &query.brightness,
            );
            product_grid::ProductCard {
                slug: product.slug.clone(),
                name: ellipsize(&product.name),
                price: format_price(product.price_cents),
                image_path: display.map(|d| d.image.path.clone()),
            }
        })
        .collect();

    let grid = product_grid::view(product_grid::ProductGridProps {
        cards,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {
        product_grid::ProductGridEvent::ProductPressed { slug } => {
            Event::OpenProduct { slug }
        },
    });

    let main = column![search, grid]
        .spacing(CONTENT_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    container(
        row![sidebar, main]
            .spacing(CONTENT_SPACING)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(CONTENT_SPACING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Product screen: gallery, variant selectors and the cart button.
fn view_product<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event> {
    let palette = *theme_props.theme.palette();

    let Some(page) = app.features.product_detail().page() else {
        return missing_page("Product not found.", palette, &app.fonts);
    };
    let Some(product) = app.catalog.product(page.slug()) else {
        return missing_page("Product not found.", palette, &app.fonts);
    };

    let in_stock_variants = product.in_stock_variants();
    let mut colors: Vec<String> = in_stock_variants
        .iter()
        .map(|variant| variant.color.clone())
        .collect();
    colors.sort();
    colors.dedup();

    let sizes = page
        .color()
        .map(|color| sizes_for_color(product, color))
        .unwrap_or_default();

    let button_state = &page.cart_button;
    product_page::view(product_page::ProductPageProps {
        name: &product.name,
        description: &product.description,
        price: format_price(product.price_cents),
        current_image: page.gallery.current(),
        thumbnails: page.gallery.images(),
        active_index: page.gallery.index(),
        colors,
        selected_color: page.color(),
        sizes,
        selected_size: page.size(),
        in_stock: page.variant_id().is_some(),
        button_label: button_state.label(),
        button_enabled: button_state.is_enabled(),
        button_success: button_state.shows_success_style(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {
        product_page::ProductPageEvent::PreviousImagePressed => {
            Event::ProductDetail(ProductDetailEvent::PreviousImagePressed)
        },
        product_page::ProductPageEvent::NextImagePressed => {
            Event::ProductDetail(ProductDetailEvent::NextImagePressed)
        },
        product_page::ProductPageEvent::ThumbnailPressed { index } => {
            Event::ProductDetail(ProductDetailEvent::ImageSelected { index })
        },
        product_page::ProductPageEvent::ColorPressed { color } => {
            Event::ProductDetail(ProductDetailEvent::ColorSelected { color })
        },
        product_page::ProductPageEvent::SizePressed { size } => {
            Event::ProductDetail(ProductDetailEvent::SizeSelected { size })
        },
        product_page::ProductPageEvent::AddToCartPressed => {
            Event::ProductDetail(ProductDetailEvent::AddToCartPressed)
        },
    })
}

/// Cart screen: joined cart lines with totals.
fn view_cart<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event> {
    let rows: Vec<cart_page::CartRow> = app
        .features
        .cart()
        .lines(&app.catalog)
        .into_iter()
        .map(|line| cart_page::CartRow {
            description: format!(
                "{} ({}, {})",
                line.product_name, line.color, line.size
            ),
            quantity: line.quantity,
            total: format_price(line.total_cents),
        })
        .collect();

    cart_page::view(cart_page::CartPageProps {
        rows,
        total: format_price(app.features.cart().total_cents(&app.catalog)),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {
        cart_page::CartPageEvent::ClearPressed => {
            Event::Cart(CartEvent::ClearPressed)
        },
        cart_page::CartPageEvent::ContinuePressed => Event::OpenBrowse,
    })
}

fn missing_page<'a>(
    message: &'static str,
    palette: crate::theme::Palette,
    fonts: &'a crate::fonts::FontsConfig,
) -> Element<'a, Event> {
    container(
        text(message)
            .size(fonts.ui.size)
            .color(palette.dim_foreground),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

pub(super) fn screen_size_from_window(window_size: Size) -> Size {
    let height =
        (window_size.height - action_bar::ACTION_BAR_HEIGHT).max(0.0);
    Size::new(window_size.width, height)
}
