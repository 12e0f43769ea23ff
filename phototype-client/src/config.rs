use std::time::Duration;

/// Production endpoint of the catalog service.
pub const DEFAULT_API_BASE: &str = "https://junior.balinasoft.com/api/v2";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to construct an [`crate::ApiClient`].
///
/// The base URL is validated at client construction, not here, so a config
/// value can be built infallibly and overridden in tests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Config pointing at a non-default server, keeping the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
