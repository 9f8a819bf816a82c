use iced::{Task, window};

use super::{App, Event, request_catalog_load};
use crate::features::Feature;
use crate::features::browse::BrowseCtx;
use crate::features::cart::CartCtx;
use crate::features::hover::HoverEvent;
use crate::features::product_detail::{ProductDetailCtx, ProductDetailEvent};
use crate::state::Screen;

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    match event {
        Event::IcedReady => Task::batch(vec![
            request_catalog_load(&app.config),
            Task::done(Event::Hover(HoverEvent::Remount)),
        ]),
        Event::CatalogLoaded { catalog, schemas } => {
            app.catalog = *catalog;
            app.schemas = *schemas;
            // The grid content arrives with the catalog, which counts
            // as a content swap for the hover panels.
            Task::done(Event::Hover(HoverEvent::Remount))
        },
        Event::CatalogLoadFailed { message } => {
            log::warn!("catalog load failed: {message}");
            Task::none()
        },
        Event::Hover(event) => app.features.hover_mut().reduce(event, &()),
        Event::Browse(event) => {
            let ctx = BrowseCtx {
                catalog: &app.catalog,
                schemas: &app.schemas,
            };
            app.features.browse_mut().reduce(event, &ctx)
        },
        Event::ProductDetail(event) => {
            let ctx = ProductDetailCtx {
                catalog: &app.catalog,
            };
            app.features.product_detail_mut().reduce(event, &ctx)
        },
        Event::Cart(event) => {
            let ctx = CartCtx {
                catalog: &app.catalog,
            };
            app.features.cart_mut().reduce(event, &ctx)
        },
        Event::OpenProduct { slug } => open_product(app, slug),
        Event::OpenBrowse => open_browse(app),
        Event::OpenCart => open_cart(app),
        Event::Keyboard(event) => handle_keyboard(app, event),
        Event::Window(window::Event::Resized(size)) => {
            app.state
                .set_screen_size(super::view::screen_size_from_window(size));
            Task::none()
        },
        Event::Window(_) => Task::none(),
    }
}

fn open_product(app: &mut App, slug: String) -> Task<Event> {
    app.state.screen = Screen::Product;

    let ctx = ProductDetailCtx {
        catalog: &app.catalog,
    };
    let open_task = app
        .features
        .product_detail_mut()
        .reduce(ProductDetailEvent::Opened { slug }, &ctx);

    Task::batch(vec![open_task, remount_panels(app)])
}

fn open_browse(app: &mut App) -> Task<Event> {
    app.state.screen = Screen::Browse;

    let ctx = ProductDetailCtx {
        catalog: &app.catalog,
    };
    let close_task = app
        .features
        .product_detail_mut()
        .reduce(ProductDetailEvent::Closed, &ctx);

    Task::batch(vec![close_task, remount_panels(app)])
}

fn open_cart(app: &mut App) -> Task<Event> {
    app.state.screen = Screen::Cart;
    remount_panels(app)
}

/// Every screen change replaces the content area, which re-runs panel
/// initialization, same as after a partial page swap.
fn remount_panels(app: &mut App) -> Task<Event> {
    app.features.hover_mut().reduce(HoverEvent::Remount, &())
}

fn handle_keyboard(app: &mut App, event: iced::keyboard::Event) -> Task<Event> {
    if let iced::keyboard::Event::KeyPressed { key, .. } = event
        && matches!(
            key,
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape)
        )
        && app.state.screen != Screen::Browse
    {
        return open_browse(app);
    }

    Task::none()
}
