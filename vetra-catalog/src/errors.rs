use thiserror::Error;

/// Errors emitted while reading or writing catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog IO failed")]
    Io(#[from] std::io::Error),
    #[error("catalog JSON failed")]
    Json(#[from] serde_json::Error),
}
