use std::fmt;

use phototype_model::{PhotoFilter, PhotoType};
use tracing::{debug, warn};

use crate::error::Result;
use crate::transport::CatalogTransport;

/// Page ceiling assumed before the first real response arrives; every
/// response overwrites it with the server's `totalPages`.
const DEFAULT_TOTAL_PAGES: i32 = 6;

/// Result of a [`PhotoCatalog::fetch_next_page`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was fetched; this many entries passed the filter and were
    /// appended.
    Appended { added: usize },
    /// The page ceiling was reached; no request was issued.
    Exhausted,
}

/// Client-side pagination state for the remote photo-type catalog.
///
/// The store accumulates entries page by page under the current filter.
/// Within one filter session `entries` is append-only and keeps server
/// order; [`PhotoCatalog::change_filter`] discards the accumulation and
/// restarts from page zero. All state is mutated exclusively through the
/// store's own methods — callers read snapshots via the accessors and,
/// because the fetching methods take `&mut self`, the exclusive borrow rules
/// out overlapping fetches instead of leaving that to caller discipline.
pub struct PhotoCatalog<T> {
    transport: T,
    entries: Vec<PhotoType>,
    current_page: i32,
    total_pages: i32,
    filter: PhotoFilter,
}

impl<T> fmt::Debug for PhotoCatalog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoCatalog")
            .field("entries", &self.entries.len())
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<T> PhotoCatalog<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            entries: Vec::new(),
            current_page: -1,
            total_pages: DEFAULT_TOTAL_PAGES,
            filter: PhotoFilter::All,
        }
    }

    /// Entries accumulated under the current filter, in server order.
    pub fn entries(&self) -> &[PhotoType] {
        &self.entries
    }

    /// Zero-based index of the last requested page; -1 until the first fetch.
    pub fn current_page_index(&self) -> i32 {
        self.current_page
    }

    pub fn total_pages(&self) -> i32 {
        self.total_pages
    }

    pub fn filter(&self) -> PhotoFilter {
        self.filter
    }

    /// Whether another page may be requested in this filter session. The UI
    /// uses this to gate its fetch-on-scroll trigger.
    pub fn has_more_pages(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }
}

impl<T: CatalogTransport> PhotoCatalog<T> {
    /// Request the next catalog page and fold it into the accumulated state.
    ///
    /// Past the page ceiling this is a no-op: no request is issued and
    /// [`FetchOutcome::Exhausted`] is returned. On a transport or decoding
    /// failure the error is returned with entries and ceiling untouched, but
    /// the page index stays advanced — the failed page is skipped, not
    /// retried.
    pub async fn fetch_next_page(&mut self) -> Result<FetchOutcome> {
        if !self.has_more_pages() {
            debug!(
                current_page = self.current_page,
                total_pages = self.total_pages,
                "page ceiling reached, not fetching"
            );
            return Ok(FetchOutcome::Exhausted);
        }

        self.current_page += 1;
        let page = match self.transport.fetch_page(self.current_page as u32).await {
            Ok(page) => page,
            Err(err) => {
                warn!(page = self.current_page, error = %err, "failed to fetch catalog page");
                return Err(err);
            }
        };

        // The server is authoritative for both counters and may shrink or
        // grow the page count between responses.
        self.current_page = page.page as i32;
        self.total_pages = page.total_pages as i32;

        let filter = self.filter;
        let before = self.entries.len();
        self.entries
            .extend(page.content.into_iter().filter(|t| filter.matches(t)));
        let added = self.entries.len() - before;

        debug!(
            page = self.current_page,
            added,
            total = self.entries.len(),
            "appended catalog page"
        );
        Ok(FetchOutcome::Appended { added })
    }

    /// Switch the filter and restart the catalog from page zero.
    ///
    /// Accumulated entries and both page counters are reset before the
    /// refetch begins, so a failed refetch leaves an empty catalog rather
    /// than a stale one.
    pub async fn change_filter(&mut self, filter: PhotoFilter) -> Result<FetchOutcome> {
        debug!(%filter, "changing catalog filter");
        self.filter = filter;
        self.entries.clear();
        self.current_page = -1;
        self.total_pages = DEFAULT_TOTAL_PAGES;
        self.fetch_next_page().await
    }

    /// Upload a captured photo for `photo_type`, returning the
    /// server-assigned id.
    ///
    /// The accumulated entries are left untouched; the new photo becomes
    /// visible through a fresh fetch only.
    pub async fn upload_photo(
        &self,
        photo_type: &PhotoType,
        image: Vec<u8>,
        uploader_name: &str,
    ) -> Result<String> {
        self.transport
            .upload_photo(photo_type.clone(), image, uploader_name.to_owned())
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;
    use phototype_model::PhotoTypePage;
    use url::Url;

    use super::*;
    use crate::error::ApiError;
    use crate::transport::MockCatalogTransport;

    fn entry(id: u64, image: Option<&str>) -> PhotoType {
        PhotoType {
            id,
            name: format!("type-{id}"),
            image: image.map(|u| Url::parse(u).unwrap()),
        }
    }

    fn page(index: u32, total_pages: u32, content: Vec<PhotoType>) -> PhotoTypePage {
        PhotoTypePage {
            page: index,
            page_size: content.len() as u32,
            total_pages,
            total_elements: content.len() as u64,
            content,
        }
    }

    fn ids(catalog: &PhotoCatalog<MockCatalogTransport>) -> Vec<u64> {
        catalog.entries().iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn accumulates_pages_in_server_order() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page(0, 3, vec![entry(1, None), entry(2, None)])));
        transport
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(page(1, 3, vec![entry(3, None), entry(4, None)])));

        let mut catalog = PhotoCatalog::new(transport);
        assert_eq!(catalog.current_page_index(), -1);

        let outcome = catalog.fetch_next_page().await.unwrap();
        assert_eq!(outcome, FetchOutcome::Appended { added: 2 });
        assert_eq!(catalog.current_page_index(), 0);
        assert_eq!(catalog.total_pages(), 3);

        catalog.fetch_next_page().await.unwrap();
        assert_eq!(ids(&catalog), vec![1, 2, 3, 4]);
        assert_eq!(catalog.current_page_index(), 1);
    }

    #[tokio::test]
    async fn ceiling_reached_issues_no_request() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page(0, 1, vec![entry(1, None)])));

        let mut catalog = PhotoCatalog::new(transport);
        catalog.fetch_next_page().await.unwrap();
        assert!(!catalog.has_more_pages());

        // times(1) above: a second transport call would fail the test.
        let outcome = catalog.fetch_next_page().await.unwrap();
        assert_eq!(outcome, FetchOutcome::Exhausted);
        assert_eq!(ids(&catalog), vec![1]);
    }

    #[tokio::test]
    async fn server_may_shrink_the_page_count() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page(0, 1, vec![entry(1, None)])));

        let mut catalog = PhotoCatalog::new(transport);
        assert_eq!(catalog.total_pages(), 6);
        catalog.fetch_next_page().await.unwrap();
        assert_eq!(catalog.total_pages(), 1);
        assert_eq!(
            catalog.fetch_next_page().await.unwrap(),
            FetchOutcome::Exhausted
        );
    }

    #[tokio::test]
    async fn failed_page_is_skipped_not_retried() {
        let mut seq = Sequence::new();
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(0, 6, vec![entry(1, None)])));
        transport
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApiError::Server(500)));
        transport
            .expect_fetch_page()
            .with(eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(2, 6, vec![entry(5, None)])));

        let mut catalog = PhotoCatalog::new(transport);
        catalog.fetch_next_page().await.unwrap();

        let err = catalog.fetch_next_page().await.unwrap_err();
        assert!(matches!(err, ApiError::Server(500)));
        // Entries and ceiling untouched, index already advanced.
        assert_eq!(ids(&catalog), vec![1]);
        assert_eq!(catalog.total_pages(), 6);
        assert_eq!(catalog.current_page_index(), 1);

        // The next call asks for page 2: page 1 is gone for this session.
        catalog.fetch_next_page().await.unwrap();
        assert_eq!(ids(&catalog), vec![1, 5]);
    }

    #[tokio::test]
    async fn filter_drops_non_matching_entries_on_append() {
        let mut transport = MockCatalogTransport::new();
        transport.expect_fetch_page().with(eq(0)).returning(|_| {
            Ok(page(
                0,
                1,
                vec![
                    entry(1, Some("https://cdn.example.com/1.jpeg")),
                    entry(2, None),
                    entry(3, Some("https://cdn.example.com/3.jpeg")),
                ],
            ))
        });

        let mut catalog = PhotoCatalog::new(transport);
        let outcome = catalog.change_filter(PhotoFilter::WithImage).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Appended { added: 2 });
        assert_eq!(ids(&catalog), vec![1, 3]);
        assert!(catalog.entries().iter().all(|t| t.has_image()));
    }

    #[tokio::test]
    async fn change_filter_resets_state_and_refetches_page_zero() {
        let mut seq = Sequence::new();
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(0, 2, vec![entry(1, None), entry(2, None)])));
        transport
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(1, 2, vec![entry(3, None)])));
        // The refetch starts over at page 0 with the default ceiling.
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(0, 2, vec![entry(1, None), entry(2, None)])));

        let mut catalog = PhotoCatalog::new(transport);
        catalog.fetch_next_page().await.unwrap();
        catalog.fetch_next_page().await.unwrap();
        assert_eq!(ids(&catalog), vec![1, 2, 3]);

        catalog.change_filter(PhotoFilter::WithoutImage).await.unwrap();
        assert_eq!(catalog.filter(), PhotoFilter::WithoutImage);
        assert_eq!(ids(&catalog), vec![1, 2]);
        assert_eq!(catalog.current_page_index(), 0);
    }

    #[tokio::test]
    async fn change_filter_clears_before_the_refetch_runs() {
        let mut seq = Sequence::new();
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(0, 1, vec![entry(1, None)])));
        transport
            .expect_fetch_page()
            .with(eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApiError::Server(503)));

        let mut catalog = PhotoCatalog::new(transport);
        catalog.fetch_next_page().await.unwrap();
        assert_eq!(ids(&catalog), vec![1]);

        // Even when the refetch fails, the old accumulation is gone.
        let err = catalog.change_filter(PhotoFilter::All).await.unwrap_err();
        assert!(matches!(err, ApiError::Server(503)));
        assert!(catalog.entries().is_empty());
        assert_eq!(catalog.current_page_index(), 0);
        assert_eq!(catalog.total_pages(), 6);
    }

    #[tokio::test]
    async fn upload_delegates_and_leaves_entries_alone() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_page()
            .with(eq(0))
            .returning(|_| Ok(page(0, 1, vec![entry(7, None)])));
        transport
            .expect_upload_photo()
            .withf(|photo_type, image, uploader_name| {
                photo_type.id == 7 && image == b"\xFF\xD8\xFF" && uploader_name == "Alice"
            })
            .times(1)
            .returning(|_, _, _| Ok("stored-42".to_string()));

        let mut catalog = PhotoCatalog::new(transport);
        catalog.fetch_next_page().await.unwrap();
        let target = catalog.entries()[0].clone();

        let id = catalog
            .upload_photo(&target, b"\xFF\xD8\xFF".to_vec(), "Alice")
            .await
            .unwrap();
        assert_eq!(id, "stored-42");

        // No local image update: the list reflects uploads on refetch only.
        assert_eq!(ids(&catalog), vec![7]);
        assert!(catalog.entries()[0].image.is_none());
    }

    #[tokio::test]
    async fn upload_failure_is_reported_not_swallowed() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_upload_photo()
            .times(1)
            .returning(|_, _, _| Err(ApiError::NoResponseData));

        let catalog = PhotoCatalog::new(transport);
        let err = catalog
            .upload_photo(&entry(9, None), Vec::new(), "Alice")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NoResponseData));
    }
}
