pub mod dictionary;
pub mod preprocess;
pub mod search;
pub mod state;

pub use dictionary::{LoadError, WordSource, lookup_exact};
pub use search::WordSearchHelper;
pub use state::SearchState;

#[cfg(test)]
mod tests;
