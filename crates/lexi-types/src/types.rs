use serde::{Deserialize, Serialize};

/// One vocabulary record as served by `words.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Lookup key, matched case-insensitively
    pub word: String,
    pub definition: String,
    /// Category tag of the memory aid
    pub mnemonic_type: String,
    pub mnemonic_content: String,
    /// Source sentence followed by its translation
    pub example_sentence: String,
}

/// Ordered word list, kept in load order
pub type WordCollection = Vec<WordEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    Found(WordEntry),
    #[default]
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            SearchOutcome::Found(entry) => Some(entry),
            SearchOutcome::NotFound => None,
        }
    }
}

impl From<Option<WordEntry>> for SearchOutcome {
    fn from(entry: Option<WordEntry>) -> Self {
        entry.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Replace the current query and show the result
    Query(String),
    TextInput {
        text: String,
        source: TextSource,
    },
    Paste,
    /// Copy the current entry to the clipboard
    Copy,
    Clear,
    Reload,
    Status,
    Quit,
    ShowResult {
        query: String,
        outcome: SearchOutcome,
    },
    ShowMessage(String),
    ShowError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Clipboard,
    Manual,
}
