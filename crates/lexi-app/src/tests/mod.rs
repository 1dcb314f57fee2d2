
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kanal::AsyncReceiver;
use lexi_config::Config;
use lexi_core::{LoadError, WordSource};
use lexi_io::{ClipboardBackend, ClipboardHelper, FixedProbe};
use lexi_types::{AppEvent, WordCollection, WordEntry};
use tokio::time::timeout;

use crate::state::AppState;

pub(crate) fn apple() -> WordEntry {
    WordEntry {
        word: "apple".to_string(),
        definition: "苹果".to_string(),
        mnemonic_type: "sound".to_string(),
        mnemonic_content: "...".to_string(),
        example_sentence: "...".to_string(),
    }
}

pub(crate) struct StaticSource(pub Result<WordCollection, u16>);

#[async_trait::async_trait]
impl WordSource for StaticSource {
    async fn fetch_words(&self) -> Result<WordCollection, LoadError> {
        self.0.clone().map_err(LoadError::Status)
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

#[derive(Default)]
pub(crate) struct MemoryClipboard(pub Mutex<String>);

#[async_trait::async_trait]
impl ClipboardBackend for MemoryClipboard {
    async fn read_text(&self) -> anyhow::Result<String> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        *self.0.lock().unwrap() = text.to_string();
        Ok(())
    }
}

/// State over an in-memory word list holding only "apple", not loaded yet
pub(crate) fn unloaded_state(
    clipboard_text: &str,
    supported: bool,
) -> (AppState, Arc<MemoryClipboard>) {
    let backend = Arc::new(MemoryClipboard(Mutex::new(clipboard_text.to_string())));
    let clipboard = ClipboardHelper::new(backend.clone(), Arc::new(FixedProbe(supported)));
    let state = AppState::from_parts(
        Config::default(),
        Arc::new(StaticSource(Ok(vec![apple()]))),
        clipboard,
    );
    (state, backend)
}

pub(crate) async fn loaded_state(
    clipboard_text: &str,
    supported: bool,
) -> (Arc<AppState>, Arc<MemoryClipboard>) {
    let (state, backend) = unloaded_state(clipboard_text, supported);
    state.search.load_words_data().await;
    (Arc::new(state), backend)
}

pub(crate) async fn next(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no ui event")
        .expect("ui channel closed")
}
