use std::path::PathBuf;

use iced::Task;
use vetra_catalog::{Cart, CartLine, Catalog};

use super::event::CartEvent;
use super::services::{self, STATUS_OK, VariantAvailability};
use super::storage;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::product_detail::ProductDetailEvent;

/// Runtime context required by the cart reducer.
pub(crate) struct CartCtx<'a> {
    pub(crate) catalog: &'a Catalog,
}

/// Cart feature root owning the cart and its persistence.
#[derive(Debug)]
pub(crate) struct CartFeature {
    cart: Cart,
    store_path: PathBuf,
}

impl CartFeature {
    /// Load the persisted cart, degrading to an empty one.
    pub(crate) fn load(store_path: PathBuf) -> Self {
        let cart = match storage::load_cart(&store_path) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                log::warn!("cart load failed, starting empty: {err}");
                Cart::new()
            },
        };

        Self { cart, store_path }
    }

    /// Total number of units in the cart.
    pub(crate) fn len(&self) -> u32 {
        self.cart.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Cart rows joined against the catalog.
    pub(crate) fn lines(&self, catalog: &Catalog) -> Vec<CartLine> {
        self.cart.lines(catalog)
    }

    /// Total cost of all resolvable entries.
    pub(crate) fn total_cents(&self, catalog: &Catalog) -> u32 {
        self.cart.total_cents(catalog)
    }

    fn persist(&self) {
        if let Err(err) = storage::save_cart(&self.store_path, &self.cart) {
            log::warn!("cart save failed: {err}");
        }
    }

    fn reduce_add_requested(
        &mut self,
        ctx: &CartCtx<'_>,
        variant_id: u64,
    ) -> Task<AppEvent> {
        let availability = match ctx.catalog.variant(variant_id) {
            None => VariantAvailability::Unknown,
            Some((_, variant)) if !variant.in_stock() => {
                VariantAvailability::OutOfStock
            },
            Some(_) => VariantAvailability::Available,
        };

        Task::perform(
            async move {
                let status = services::submit_add(availability).await;
                (variant_id, status)
            },
            |(variant_id, status)| {
                AppEvent::Cart(CartEvent::AddCompleted { variant_id, status })
            },
        )
    }

    fn reduce_add_completed(
        &mut self,
        variant_id: u64,
        status: u16,
    ) -> Task<AppEvent> {
        if status == STATUS_OK {
            self.cart.add(variant_id);
            self.persist();
        }

        Task::done(AppEvent::ProductDetail(ProductDetailEvent::CartResponse {
            status,
        }))
    }
}

impl Feature for CartFeature {
    type Event = CartEvent;
    type Ctx<'a>
        = CartCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: CartEvent,
        ctx: &CartCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            CartEvent::AddRequested { variant_id } => {
                self.reduce_add_requested(ctx, variant_id)
            },
            CartEvent::AddCompleted { variant_id, status } => {
                self.reduce_add_completed(variant_id, status)
            },
            CartEvent::ClearPressed => {
                self.cart.clear();
                self.persist();
                Task::none()
            },
        }
    }
}
