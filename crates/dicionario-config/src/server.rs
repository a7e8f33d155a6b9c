use std::env;

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "dicionario".to_string()
}

/// Tool server identity and result shape
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported in the initialize handshake
    #[serde(default = "default_name")]
    pub name: String,
    /// Attach the entry as structured JSON next to the text result
    #[serde(default)]
    pub include_structured: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            include_structured: false,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        let name = env::var("DICIONARIO_SERVER_NAME").unwrap_or_else(|_| default_name());

        let include_structured = env::var("DICIONARIO_INCLUDE_STRUCTURED")
            .ok()
            .and_then(|v| crate::parse_flag(&v))
            .unwrap_or(false);

        Self {
            name,
            include_structured,
        }
    }
}
