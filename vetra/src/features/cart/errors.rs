use thiserror::Error;

/// Errors emitted while reading or writing the persisted cart.
#[derive(Debug, Error)]
pub(crate) enum CartStoreError {
    #[error("cart IO failed")]
    Io(#[from] std::io::Error),
    #[error("cart JSON failed")]
    Json(#[from] serde_json::Error),
}
