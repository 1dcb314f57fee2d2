use serde::{Deserialize, Serialize};

use crate::parsed;

fn default_enabled() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// When false the clipboard is reported as unsupported
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Look up every new clipboard text automatically
    #[serde(default)]
    pub watch: bool,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            watch: false,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ClipboardConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            enabled: parsed(var, "LEXI_CLIPBOARD").unwrap_or_else(default_enabled),
            watch: parsed(var, "LEXI_CLIPBOARD_WATCH").unwrap_or(false),
            poll_interval_ms: parsed(var, "LEXI_CLIPBOARD_POLL_MS")
                .unwrap_or_else(default_poll_interval_ms),
        }
    }
}
