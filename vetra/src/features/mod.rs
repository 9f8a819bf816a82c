use iced::Task;

use crate::app::Event as AppEvent;
use crate::config::AppConfig;

pub(crate) mod browse;
pub(crate) mod cart;
pub(crate) mod hover;
pub(crate) mod product_detail;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for struct-based features.
pub(crate) struct Features {
    browse: browse::BrowseFeature,
    cart: cart::CartFeature,
    hover: hover::HoverFeature,
    product_detail: product_detail::ProductDetailFeature,
}

impl Features {
    /// Create a features container wired to the app configuration.
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            browse: browse::BrowseFeature::new(),
            cart: cart::CartFeature::load(config.cart_path.clone()),
            hover: hover::HoverFeature::new(),
            product_detail: product_detail::ProductDetailFeature::new(),
        }
    }

    /// Return read-only access to browse feature state and queries.
    pub(crate) fn browse(&self) -> &browse::BrowseFeature {
        &self.browse
    }

    /// Return mutable access for routing browse events.
    pub(crate) fn browse_mut(&mut self) -> &mut browse::BrowseFeature {
        &mut self.browse
    }

    /// Return read-only access to cart feature state and queries.
    pub(crate) fn cart(&self) -> &cart::CartFeature {
        &self.cart
    }

    /// Return mutable access for routing cart events.
    pub(crate) fn cart_mut(&mut self) -> &mut cart::CartFeature {
        &mut self.cart
    }

    /// Return read-only access to hover feature state and queries.
    pub(crate) fn hover(&self) -> &hover::HoverFeature {
        &self.hover
    }

    /// Return mutable access for routing hover events.
    pub(crate) fn hover_mut(&mut self) -> &mut hover::HoverFeature {
        &mut self.hover
    }

    /// Return read-only access to product detail feature state and queries.
    pub(crate) fn product_detail(
        &self,
    ) -> &product_detail::ProductDetailFeature {
        &self.product_detail
    }

    /// Return mutable access for routing product detail events.
    pub(crate) fn product_detail_mut(
        &mut self,
    ) -> &mut product_detail::ProductDetailFeature {
        &mut self.product_detail
    }
}
