use thiserror::Error;

/// Everything that can go wrong talking to the catalog service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A constructed request URL failed to parse. The base URL is fixed, so
    /// this is a defensive check rather than an expected path.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure: DNS, TLS, timeout, connection reset.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with something that is not an HTTP response.
    /// Unreachable with an HTTP transport; kept for contract parity.
    #[error("invalid response from server")]
    InvalidResponse,

    /// HTTP status outside 200-299.
    #[error("server returned status {0}")]
    Server(u16),

    /// A 2xx upload response arrived with an empty body.
    #[error("server returned no response data")]
    NoResponseData,

    /// The upload response parsed as JSON but carries no string `id` field.
    #[error("response is missing the expected `id` field")]
    InvalidResponseFormat,

    /// The upload response body is not valid JSON.
    #[error("failed to parse response JSON: {0}")]
    JsonParsing(#[source] serde_json::Error),

    /// A page-fetch body does not match the `PhotoTypePage` schema.
    #[error("failed to decode catalog page: {0}")]
    Decoding(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
