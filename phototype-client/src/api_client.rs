use async_trait::async_trait;
use phototype_model::{PhotoType, PhotoTypePage};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::multipart::MultipartForm;
use crate::transport::CatalogTransport;

/// HTTP implementation of [`CatalogTransport`] against the catalog service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from `config`, validating the base URL.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        let client = Client::builder().timeout(config.timeout).build()?;

        debug!(%base_url, "creating catalog API client");

        Ok(Self { client, base_url })
    }

    /// Client against the production endpoint with default settings.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ClientConfig::default())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = Url::parse(&format!("{}/{}", self.base_url, path))?;
        Ok(url)
    }

    /// Fetch one zero-based catalog page. The decoded page is returned
    /// unmodified: no check that `content` is non-empty or that `page`
    /// matches the request.
    pub async fn fetch_page(&self, page: u32) -> Result<PhotoTypePage> {
        let mut url = self.endpoint("photo/type")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());

        debug!(%url, "GET catalog page");
        let response = self.client.get(url).send().await?;

        check_status(response.status())
            .inspect_err(|_| warn!(page, status = %response.status(), "catalog page request rejected"))?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ApiError::Decoding)
    }

    /// Upload a captured photo for `photo_type`, returning the id the server
    /// assigned to the stored photo.
    pub async fn upload_photo(
        &self,
        photo_type: &PhotoType,
        image: Vec<u8>,
        uploader_name: &str,
    ) -> Result<String> {
        let url = self.endpoint("photo")?;
        let form = MultipartForm::new(uploader_name, image, photo_type.id);

        debug!(%url, type_id = photo_type.id, bytes = form.len(), "POST photo upload");
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, form.content_type())
            .body(form.into_bytes())
            .send()
            .await?;

        check_status(response.status())
            .inspect_err(|_| warn!(type_id = photo_type.id, status = %response.status(), "photo upload rejected"))?;

        let body = response.bytes().await?;
        parse_upload_response(&body)
    }
}

#[async_trait]
impl CatalogTransport for ApiClient {
    async fn fetch_page(&self, page: u32) -> Result<PhotoTypePage> {
        ApiClient::fetch_page(self, page).await
    }

    async fn upload_photo(
        &self,
        photo_type: PhotoType,
        image: Vec<u8>,
        uploader_name: String,
    ) -> Result<String> {
        ApiClient::upload_photo(self, &photo_type, image, &uploader_name).await
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Server(status.as_u16()))
    }
}

/// Classify the upload response body: the contract is JSON carrying a string
/// `id`; anything else maps to a distinct error.
fn parse_upload_response(body: &[u8]) -> Result<String> {
    if body.is_empty() {
        return Err(ApiError::NoResponseData);
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(ApiError::JsonParsing)?;
    match value.get("id").and_then(serde_json::Value::as_str) {
        Some(id) => Ok(id.to_owned()),
        None => Err(ApiError::InvalidResponseFormat),
    }
}
