use std::sync::Arc;

use lexi_types::SearchOutcome;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::dictionary::{WordSource, lookup_exact};
use crate::state::SearchState;

/// Loads a word list and answers exact-match queries against it.
///
/// State lives in a `watch` channel so a front end can subscribe to it.
/// No lock is held across an await, so overlapping loads simply race and
/// whichever response lands last wins.
pub struct WordSearchHelper {
    source: Arc<dyn WordSource>,
    state: watch::Sender<SearchState>,
}

impl WordSearchHelper {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            state: watch::Sender::new(SearchState::default()),
        }
    }

    /// Create the helper and kick off the first load in the background
    pub fn mount(source: Arc<dyn WordSource>) -> (Arc<Self>, JoinHandle<()>) {
        let helper = Arc::new(Self::new(source));
        let handle = helper.spawn_load();
        (helper, handle)
    }

    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<()> {
        let helper = Arc::clone(self);
        tokio::spawn(async move { helper.load_words_data().await })
    }

    /// Fetch the word list and replace the collection with it.
    ///
    /// Failures are recorded in `last_error` and never returned. The
    /// previous collection is kept when a reload fails.
    pub async fn load_words_data(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.last_error = None;
        });
        let _loading = LoadingGuard(&self.state);

        tracing::debug!("Loading words from {}", self.source.describe());

        match self.source.fetch_words().await {
            Ok(words) => {
                tracing::info!("Loaded {} words", words.len());
                self.state.send_modify(|state| state.collection = words);
            }
            Err(e) => {
                tracing::error!("Failed to load words data: {}", e);
                self.state
                    .send_modify(|state| state.last_error = Some(e.to_string()));
            }
        }
    }

    pub fn search_word(&self, query: &str) -> SearchOutcome {
        let outcome = lookup_exact(&self.state.borrow().collection, query);
        tracing::debug!("Search '{}': found={}", query, outcome.is_found());
        outcome
    }

    /// Result for the stored query, computed on every call
    pub fn current_result(&self) -> SearchOutcome {
        let state = self.state.borrow();
        lookup_exact(&state.collection, &state.query)
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| state.query = query);
    }

    pub fn clear_search(&self) {
        self.state.send_modify(|state| state.query.clear());
    }

    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    pub fn word_count(&self) -> usize {
        self.state.borrow().collection.len()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }
}

/// Resets `is_loading` on every exit path, including a dropped future
struct LoadingGuard<'a>(&'a watch::Sender<SearchState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|state| state.is_loading = false);
    }
}
