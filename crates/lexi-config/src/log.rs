use serde::{Deserialize, Serialize};

use crate::parsed;

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, `RUST_LOG` takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LogConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: var("LEXI_LOG").unwrap_or_else(default_filter),
            json: parsed(var, "LEXI_LOG_JSON").unwrap_or(false),
        }
    }
}
