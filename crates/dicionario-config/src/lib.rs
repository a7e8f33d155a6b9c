use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::server::ServerConfig;

pub mod dictionary;
pub mod server;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub server: ServerConfig,

    /// tracing filter directive, e.g. "info" or "dicionario_core=debug"
    pub log_filter: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            server: ServerConfig::default(),
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("DICIONARIO_LOG").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("DICIONARIO_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Config {
            dictionary: DictionaryConfig::new(),
            server: ServerConfig::new(),

            log_filter,
            log_json,
        }
    }
}

/// Parse a boolean flag the way shells usually spell them
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
