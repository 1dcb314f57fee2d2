use std::sync::Arc;
use std::time::Duration;

use lexi_config::Config;
use lexi_config::words::WordsConfig;
use lexi_core::{LoadError, WordSearchHelper, WordSource};
use lexi_io::{ClipboardHelper, FileWordSource, HttpWordSource};

pub struct AppState {
    pub config: Config,
    pub search: Arc<WordSearchHelper>,
    pub clipboard: ClipboardHelper,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, LoadError> {
        let source = word_source(&config.words)?;

        let clipboard = if config.clipboard.enabled {
            ClipboardHelper::system()
        } else {
            tracing::info!("Clipboard disabled by config");
            ClipboardHelper::disabled()
        };

        Ok(Self::from_parts(config, source, clipboard))
    }

    pub fn from_parts(
        config: Config,
        source: Arc<dyn WordSource>,
        clipboard: ClipboardHelper,
    ) -> Self {
        Self {
            config,
            search: Arc::new(WordSearchHelper::new(source)),
            clipboard,
        }
    }
}

fn word_source(config: &WordsConfig) -> Result<Arc<dyn WordSource>, LoadError> {
    if let Some(path) = &config.file {
        tracing::info!("Reading words from file {}", path);
        return Ok(Arc::new(FileWordSource::new(path)));
    }

    let source = HttpWordSource::new(
        &config.base_url,
        &config.resource_path,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    tracing::info!("Fetching words from {}", source.url());

    Ok(Arc::new(source))
}
