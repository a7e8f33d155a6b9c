use std::time::Duration;

use async_trait::async_trait;
use dicionario_config::dictionary::DictionaryConfig;
use reqwest::{StatusCode, Url};

use crate::{DictionaryFetcher, FetchError, ProviderMetadata};

/// Client for the Real Academia Galega dictionary search endpoint
#[derive(Clone)]
pub struct RagClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RagClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Search URL for `word`, appended as a single percent-encoded segment
    pub fn lookup_url(&self, word: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

#[async_trait]
impl DictionaryFetcher for RagClient {
    async fn fetch(&self, word: &str) -> Result<Option<serde_json::Value>, FetchError> {
        let url = self.lookup_url(word)?;
        tracing::debug!(%url, "Fetching dictionary entry");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(Some(json))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Real Academia Galega".to_string(),
            endpoint: self.base_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> Result<RagClient, FetchError> {
        RagClient::new(&DictionaryConfig {
            base_url: base_url.to_string(),
            ..DictionaryConfig::default()
        })
    }

    #[test]
    fn test_lookup_url_encodes_word() {
        let client = client("https://example.org/dicionario/busca").unwrap();
        let url = client.lookup_url("botar a casa").unwrap();
        assert_eq!(url.as_str(), "https://example.org/dicionario/busca/botar%20a%20casa");
    }

    #[test]
    fn test_lookup_url_with_trailing_slash() {
        let client = client("https://example.org/busca/").unwrap();
        let url = client.lookup_url("casa").unwrap();
        assert_eq!(url.as_str(), "https://example.org/busca/casa");
    }

    #[test]
    fn test_lookup_url_keeps_slash_inside_segment() {
        let client = client("https://example.org/busca").unwrap();
        let url = client.lookup_url("a/b").unwrap();
        assert_eq!(url.as_str(), "https://example.org/busca/a%2Fb");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(client("not a url"), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(client("mailto:rag@example.org"), Err(FetchError::InvalidUrl(_))));
    }
}
