use crate::models::{AboutUs, ForestError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("document is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid organization chart: {0}")]
    InvalidDocument(#[from] ForestError),
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence gateway for the page document.
///
/// `replace` overwrites the whole document; there is no partial update and the
/// last write wins.
pub trait DocumentStore: Send + Sync + 'static {
    fn fetch(&self) -> Result<Option<AboutUs>, StoreError>;

    fn replace(&self, doc: &AboutUs) -> Result<AboutUs, StoreError>;
}
