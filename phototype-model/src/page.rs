use serde::{Deserialize, Serialize};

use crate::photo_type::PhotoType;

/// One server-paginated batch of catalog entries, as returned by
/// `GET /photo/type?page={n}`.
///
/// `total_pages` is authoritative and may change between responses; callers
/// must re-read it from every page rather than caching the first value.
/// `content` is in server order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoTypePage {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub content: Vec<PhotoType>,
}
