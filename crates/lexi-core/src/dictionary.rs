use lexi_types::{SearchOutcome, WordCollection, WordEntry};

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Where a word list comes from
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch the whole word list
    async fn fetch_words(&self) -> Result<WordCollection, LoadError>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}

/// Case-insensitive exact match on `word`, first hit in load order wins.
/// A blank query never matches.
pub fn lookup_exact(collection: &[WordEntry], query: &str) -> SearchOutcome {
    let Some(normalized) = DefaultPreprocessor.process(query) else {
        return SearchOutcome::NotFound;
    };

    collection
        .iter()
        .find(|entry| entry.word.to_lowercase() == normalized)
        .cloned()
        .into()
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
