use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid sample catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
