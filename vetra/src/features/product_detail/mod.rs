mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::ProductDetailEvent;
pub(crate) use feature::{ProductDetailCtx, ProductDetailFeature};
pub(crate) use model::{
    CART_BUTTON_IDLE_LABEL, CART_BUTTON_RESET_DELAY_MS, CartButtonPhase,
};
pub(crate) use state::ProductPageState;
