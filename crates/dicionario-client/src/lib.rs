pub mod rag;

pub use rag::RagClient;

/// Source of raw search payloads for a query word
#[async_trait::async_trait]
pub trait DictionaryFetcher: Send + Sync {
    /// Fetch the search payload for `word`; `Ok(None)` when upstream has no entry
    async fn fetch(&self, word: &str) -> Result<Option<serde_json::Value>, FetchError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
