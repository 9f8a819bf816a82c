#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme};
use vetra_catalog::{Catalog, SchemaFile};

use crate::config::{self, AppConfig};
use crate::features::Features;
use crate::features::browse::BrowseEvent;
use crate::features::cart::CartEvent;
use crate::features::hover::HoverEvent;
use crate::features::product_detail::ProductDetailEvent;
use crate::fonts::FontsConfig;
use crate::state::State;
use crate::theme::ThemeManager;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum Event {
    IcedReady,
    CatalogLoaded {
        catalog: Box<Catalog>,
        schemas: Box<SchemaFile>,
    },
    CatalogLoadFailed {
        message: String,
    },
    Hover(HoverEvent),
    Browse(BrowseEvent),
    ProductDetail(ProductDetailEvent),
    Cart(CartEvent),
    OpenProduct {
        slug: String,
    },
    OpenBrowse,
    OpenCart,
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    fonts: FontsConfig,
    config: AppConfig,
    catalog: Catalog,
    schemas: SchemaFile,
    state: State,
    features: Features,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let config = config::load_config();
        let theme_manager = ThemeManager::new();
        let fonts = FontsConfig::default();

        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };
        let screen_size = view::screen_size_from_window(window_size);
        let state = State::new(screen_size);
        let features = Features::new(&config);

        let app = App {
            theme_manager,
            fonts,
            config,
            catalog: Catalog::empty(),
            schemas: SchemaFile::new(),
            state,
            features,
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        String::from("VETRA")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Load catalog and schemas off the event loop.
fn request_catalog_load(config: &AppConfig) -> Task<Event> {
    let catalog_path = config.catalog_path.clone();
    let schemas_path = config.schemas_path.clone();

    Task::perform(
        async move {
            let catalog = vetra_catalog::load_catalog(&catalog_path);
            let schemas = vetra_catalog::load_schemas(&schemas_path);
            (catalog, schemas)
        },
        |(catalog, schemas)| match catalog {
            Ok(Some(catalog)) => Event::CatalogLoaded {
                catalog: Box::new(catalog),
                schemas: Box::new(schemas),
            },
            // First run: no catalog imported yet, start with an empty
            // storefront instead of failing.
            Ok(None) => Event::CatalogLoaded {
                catalog: Box::new(Catalog::empty()),
                schemas: Box::new(schemas),
            },
            Err(err) => Event::CatalogLoadFailed {
                message: format!("{err}"),
            },
        },
    )
}
