use std::time::Duration;

use iced::Task;
use vetra_catalog::{Catalog, select_variant};

use super::event::ProductDetailEvent;
use super::model::{CART_BUTTON_IDLE_LABEL, CART_BUTTON_RESET_DELAY_MS};
use super::state::ProductPageState;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::cart::CartEvent;

/// Runtime context required by the product detail reducer.
pub(crate) struct ProductDetailCtx<'a> {
    pub(crate) catalog: &'a Catalog,
}

/// Product detail feature root owning the open page state.
#[derive(Debug)]
pub(crate) struct ProductDetailFeature {
    page: Option<ProductPageState>,
}

impl ProductDetailFeature {
    /// Construct the feature with no product page open.
    pub(crate) fn new() -> Self {
        Self { page: None }
    }

    /// Return the open product page state, if any.
    pub(crate) fn page(&self) -> Option<&ProductPageState> {
        self.page.as_ref()
    }

    fn reduce_opened(&mut self, ctx: &ProductDetailCtx<'_>, slug: String) {
        let Some(product) = ctx.catalog.product(&slug) else {
            log::warn!("product page requested for unknown slug {slug}");
            self.page = None;
            return;
        };

        let variant = select_variant(product, None, None);
        let manifest = variant.map(|v| v.image_manifest());
        self.page = Some(ProductPageState::new(
            slug,
            variant.map(|v| v.id),
            variant.map(|v| v.color.clone()),
            variant.map(|v| v.size.clone()),
            manifest.as_deref(),
            CART_BUTTON_IDLE_LABEL,
        ));
    }

    fn reduce_variant_change(
        &mut self,
        ctx: &ProductDetailCtx<'_>,
        color: Option<String>,
        size: Option<String>,
    ) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let Some(product) = ctx.catalog.product(page.slug()) else {
            return;
        };

        let variant =
            select_variant(product, color.as_deref(), size.as_deref());
        let manifest = variant.map(|v| v.image_manifest());
        page.set_variant(
            variant.map(|v| v.id),
            variant.map(|v| v.color.clone()),
            variant.map(|v| v.size.clone()),
            manifest.as_deref(),
        );
    }

    fn reduce_add_pressed(&mut self) -> Task<AppEvent> {
        let Some(page) = self.page.as_mut() else {
            return Task::none();
        };
        let Some(variant_id) = page.variant_id() else {
            return Task::none();
        };

        // Re-entrant presses while not idle are dropped here, before
        // the request is dispatched.
        if !page.cart_button.begin_loading() {
            return Task::none();
        }

        Task::done(AppEvent::Cart(CartEvent::AddRequested { variant_id }))
    }

    fn reduce_response(&mut self, status: u16) -> Task<AppEvent> {
        let Some(page) = self.page.as_mut() else {
            return Task::none();
        };

        match page.cart_button.apply_response(status) {
            Some(token) => schedule_reset(token),
            None => {
                if status != 200 {
                    log::warn!("add to cart failed with status {status}");
                }
                Task::none()
            },
        }
    }
}

impl Feature for ProductDetailFeature {
    type Event = ProductDetailEvent;
    type Ctx<'a>
        = ProductDetailCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: ProductDetailEvent,
        ctx: &ProductDetailCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            ProductDetailEvent::Opened { slug } => {
                self.reduce_opened(ctx, slug);
                Task::none()
            },
            ProductDetailEvent::Closed => {
                self.page = None;
                Task::none()
            },
            ProductDetailEvent::ColorSelected { color } => {
                self.reduce_variant_change(ctx, Some(color), None);
                Task::none()
            },
            ProductDetailEvent::SizeSelected { size } => {
                let color = self
                    .page
                    .as_ref()
                    .and_then(|page| page.color().map(String::from));
                self.reduce_variant_change(ctx, color, Some(size));
                Task::none()
            },
            ProductDetailEvent::ImageSelected { index } => {
                if let Some(page) = self.page.as_mut() {
                    page.gallery.set_image(index);
                }
                Task::none()
            },
            ProductDetailEvent::NextImagePressed => {
                if let Some(page) = self.page.as_mut() {
                    page.gallery.next_image();
                }
                Task::none()
            },
            ProductDetailEvent::PreviousImagePressed => {
                if let Some(page) = self.page.as_mut() {
                    page.gallery.previous_image();
                }
                Task::none()
            },
            ProductDetailEvent::AddToCartPressed => self.reduce_add_pressed(),
            ProductDetailEvent::CartResponse { status } => {
                self.reduce_response(status)
            },
            ProductDetailEvent::CartButtonResetElapsed { token } => {
                if let Some(page) = self.page.as_mut() {
                    page.cart_button.reset_elapsed(token);
                }
                Task::none()
            },
        }
    }
}

/// Deliver the success reset back to the reducer after the fixed delay.
fn schedule_reset(token: u64) -> Task<AppEvent> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(
                CART_BUTTON_RESET_DELAY_MS,
            ))
            .await;
            token
        },
        |token| {
            AppEvent::ProductDetail(
                ProductDetailEvent::CartButtonResetElapsed { token },
            )
        },
    )
}
