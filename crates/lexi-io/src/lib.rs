pub mod clipboard;
pub mod words;

pub use clipboard::{
    CapabilityProbe, ClipboardBackend, ClipboardError, ClipboardHelper, ClipboardState,
    FixedProbe, SystemClipboard, watch_clipboard,
};
pub use words::{FileWordSource, HttpWordSource};

#[cfg(test)]
mod tests;
