pub(crate) const STATUS_OK: u16 = 200;
pub(crate) const STATUS_NOT_FOUND: u16 = 404;
pub(crate) const STATUS_CONFLICT: u16 = 409;

/// Availability of the requested variant, resolved before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VariantAvailability {
    Unknown,
    OutOfStock,
    Available,
}

/// Complete an add-to-cart submission with an HTTP-style status.
///
/// The storefront backend answered the same codes over the wire; here
/// the derivation runs in-process but keeps the request/response shape
/// the button state machine consumes.
pub(crate) async fn submit_add(availability: VariantAvailability) -> u16 {
    match availability {
        VariantAvailability::Unknown => STATUS_NOT_FOUND,
        VariantAvailability::OutOfStock => STATUS_CONFLICT,
        VariantAvailability::Available => STATUS_OK,
    }
}
