use serde::{Deserialize, Serialize};

use crate::parsed;

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_resource_path() -> String {
    "/words.json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Origin serving the word list
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_resource_path")]
    pub resource_path: String,
    /// Read the word list from disk instead of HTTP
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource_path: default_resource_path(),
            file: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl WordsConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            base_url: var("LEXI_BASE_URL").unwrap_or(defaults.base_url),
            resource_path: var("LEXI_WORDS_PATH").unwrap_or(defaults.resource_path),
            file: var("LEXI_WORDS_FILE").filter(|path| !path.trim().is_empty()),
            request_timeout_secs: parsed(var, "LEXI_HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
