use lexi_types::WordCollection;

/// Observable state of a [`crate::WordSearchHelper`]
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub collection: WordCollection,
    /// Stored verbatim, trimming happens at lookup time
    pub query: String,
    pub is_loading: bool,
    pub last_error: Option<String>,
}
