/// Events emitted by the product page and its async cart lifecycle.
#[derive(Debug, Clone)]
pub(crate) enum ProductDetailEvent {
    /// A product page was opened and the controller must initialize.
    Opened { slug: String },
    /// The page was left; controller state is dropped.
    Closed,
    ColorSelected { color: String },
    SizeSelected { size: String },
    ImageSelected { index: usize },
    NextImagePressed,
    PreviousImagePressed,
    AddToCartPressed,
    /// Response-received signal of the cart action, by status code.
    CartResponse { status: u16 },
    /// Delivered by the scheduled success-reset timer.
    CartButtonResetElapsed { token: u64 },
}
