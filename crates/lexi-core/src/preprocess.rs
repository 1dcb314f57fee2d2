pub trait Preprocessor {
    /// Normalize a lookup key. Returns `None` when nothing is left to match
    fn process(&self, text: &str) -> Option<String> {
        let text = text.trim();

        if text.is_empty() {
            return None;
        }

        Some(text.to_lowercase())
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
