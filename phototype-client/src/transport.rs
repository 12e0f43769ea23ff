use async_trait::async_trait;
use phototype_model::{PhotoType, PhotoTypePage};

use crate::error::ApiError;

/// Seam between the catalog store and the HTTP layer.
///
/// The store only ever needs these two operations; keeping them behind a
/// trait lets tests drive the store with scripted responses instead of a
/// live server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Fetch one zero-based page of the remote catalog.
    async fn fetch_page(&self, page: u32) -> Result<PhotoTypePage, ApiError>;

    /// Upload a captured photo bound to `photo_type`, returning the
    /// server-assigned id.
    async fn upload_photo(
        &self,
        photo_type: PhotoType,
        image: Vec<u8>,
        uploader_name: String,
    ) -> Result<String, ApiError>;
}
