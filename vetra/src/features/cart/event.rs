/// Events driving the cart feature and its submit lifecycle.
#[derive(Debug, Clone)]
pub(crate) enum CartEvent {
    /// Request-configured signal of an add-to-cart action.
    AddRequested { variant_id: u64 },
    /// The async submit completed with an HTTP-style status.
    AddCompleted { variant_id: u64, status: u16 },
    ClearPressed,
}
