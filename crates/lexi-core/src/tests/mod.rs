
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lexi_types::{WordCollection, WordEntry};
use tokio::sync::Mutex;

use crate::dictionary::{LoadError, WordSource};

pub(crate) fn entry(word: &str, definition: &str) -> WordEntry {
    WordEntry {
        word: word.to_string(),
        definition: definition.to_string(),
        mnemonic_type: "sound".to_string(),
        mnemonic_content: "...".to_string(),
        example_sentence: "...".to_string(),
    }
}

/// Replays queued responses in order, one per fetch
pub(crate) struct ScriptedSource {
    responses: Mutex<Vec<Result<WordCollection, LoadError>>>,
    pub calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(mut responses: Vec<Result<WordCollection, LoadError>>) -> Arc<Self> {
        responses.reverse();
        Arc::new(Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl WordSource for ScriptedSource {
    async fn fetch_words(&self) -> Result<WordCollection, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .await
            .pop()
            .unwrap_or_else(|| Err(LoadError::Network("no scripted response".to_string())))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
