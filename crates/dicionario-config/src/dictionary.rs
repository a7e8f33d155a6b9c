use std::env;

use serde::{Deserialize, Serialize};

pub fn default_base_url() -> String {
    "https://academia.gal/dicionario/-/termo/busca".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("dicionario-mcp/{}", env!("CARGO_PKG_VERSION"))
}

/// Upstream dictionary endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Search endpoint; the query word is appended as a path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let base_url = env::var("DICIONARIO_BASE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds = env::var("DICIONARIO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let user_agent =
            env::var("DICIONARIO_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            base_url,
            timeout_seconds,
            user_agent,
        }
    }
}
