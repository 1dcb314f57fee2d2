use std::env;

use serde::{Deserialize, Serialize};

use self::clipboard::ClipboardConfig;
use self::log::LogConfig;
use self::words::WordsConfig;

pub mod clipboard;
pub mod log;
pub mod words;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub words: WordsConfig,
    pub clipboard: ClipboardConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            words: WordsConfig::from_vars(&var),
            clipboard: ClipboardConfig::from_vars(&var),
            log: LogConfig::from_vars(&var),
        }
    }
}

/// Parse a variable, ignoring values that don't parse
pub(crate) fn parsed<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    var(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_vars(vars(&[]));

        assert_eq!(config.words.base_url, "http://localhost:5173");
        assert_eq!(config.words.resource_path, "/words.json");
        assert_eq!(config.words.file, None);
        assert_eq!(config.words.request_timeout_secs, 30);
        assert!(config.clipboard.enabled);
        assert!(!config.clipboard.watch);
        assert_eq!(config.clipboard.poll_interval_ms, 500);
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_vars(vars(&[
            ("LEXI_BASE_URL", "https://vocab.example.com"),
            ("LEXI_WORDS_FILE", "./public/words.json"),
            ("LEXI_HTTP_TIMEOUT_SECS", "5"),
            ("LEXI_CLIPBOARD", "false"),
            ("LEXI_CLIPBOARD_POLL_MS", "250"),
            ("LEXI_LOG_JSON", "true"),
        ]));

        assert_eq!(config.words.base_url, "https://vocab.example.com");
        assert_eq!(config.words.file.as_deref(), Some("./public/words.json"));
        assert_eq!(config.words.request_timeout_secs, 5);
        assert!(!config.clipboard.enabled);
        assert_eq!(config.clipboard.poll_interval_ms, 250);
        assert!(config.log.json);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_vars(vars(&[
            ("LEXI_HTTP_TIMEOUT_SECS", "soon"),
            ("LEXI_CLIPBOARD", "maybe"),
            ("LEXI_WORDS_FILE", "  "),
        ]));

        assert_eq!(config.words.request_timeout_secs, 30);
        assert!(config.clipboard.enabled);
        assert_eq!(config.words.file, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"words":{"base_url":"http://127.0.0.1:8080"}}"#).unwrap();

        assert_eq!(config.words.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.words.resource_path, "/words.json");
        assert!(config.clipboard.enabled);
    }
}
