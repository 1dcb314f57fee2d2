use std::sync::Arc;
use std::time::Duration;

use arboard::Clipboard;
use tokio::sync::watch;
use tokio::time;

/// Host clipboard transport
#[async_trait::async_trait]
pub trait ClipboardBackend: Send + Sync {
    async fn read_text(&self) -> anyhow::Result<String>;

    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Runtime check for clipboard access
pub trait CapabilityProbe: Send + Sync {
    fn clipboard_available(&self) -> bool;
}

/// System clipboard through `arboard`. A fresh handle is opened per call
/// since `arboard::Clipboard` is blocking and not `Sync`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait::async_trait]
impl ClipboardBackend for SystemClipboard {
    async fn read_text(&self) -> anyhow::Result<String> {
        let text = tokio::task::spawn_blocking(|| Clipboard::new()?.get_text()).await??;
        Ok(text)
    }

    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || Clipboard::new()?.set_text(text)).await??;
        Ok(())
    }
}

impl CapabilityProbe for SystemClipboard {
    fn clipboard_available(&self) -> bool {
        match Clipboard::new() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                false
            }
        }
    }
}

/// Probe with a fixed answer, for disabled clipboards and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl CapabilityProbe for FixedProbe {
    fn clipboard_available(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardState {
    pub is_supported: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API not supported")]
    Unsupported,

    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Write(String),
}

/// Clipboard access with a mirrored `last_error`.
///
/// Failures are both returned and recorded in the observable state.
pub struct ClipboardHelper {
    backend: Arc<dyn ClipboardBackend>,
    probe: Arc<dyn CapabilityProbe>,
    state: watch::Sender<ClipboardState>,
}

impl ClipboardHelper {
    pub fn new(backend: Arc<dyn ClipboardBackend>, probe: Arc<dyn CapabilityProbe>) -> Self {
        let helper = Self {
            backend,
            probe,
            state: watch::Sender::new(ClipboardState::default()),
        };
        helper.check_support();
        helper
    }

    pub fn system() -> Self {
        Self::new(Arc::new(SystemClipboard), Arc::new(SystemClipboard))
    }

    /// Helper that reports unsupported and never touches the host
    pub fn disabled() -> Self {
        Self::new(Arc::new(SystemClipboard), Arc::new(FixedProbe(false)))
    }

    pub fn check_support(&self) -> bool {
        let supported = self.probe.clipboard_available();
        self.state.send_modify(|state| state.is_supported = supported);
        supported
    }

    /// Read clipboard text, trimmed
    pub async fn paste_from_clipboard(&self) -> Result<String, ClipboardError> {
        self.begin()?;

        match self.backend.read_text().await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                tracing::error!("Failed to read from clipboard: {:#}", e);
                Err(self.fail(ClipboardError::Read(message_or(e, "failed to read clipboard"))))
            }
        }
    }

    pub async fn copy_to_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        self.begin()?;

        self.backend.write_text(text).await.map_err(|e| {
            tracing::error!("Failed to write to clipboard: {:#}", e);
            self.fail(ClipboardError::Write(message_or(e, "failed to write clipboard")))
        })
    }

    pub fn is_supported(&self) -> bool {
        self.state.borrow().is_supported
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClipboardState> {
        self.state.subscribe()
    }

    pub fn backend(&self) -> Arc<dyn ClipboardBackend> {
        Arc::clone(&self.backend)
    }

    /// Clear the previous error and check the capability
    fn begin(&self) -> Result<(), ClipboardError> {
        self.state.send_modify(|state| state.last_error = None);

        if !self.is_supported() {
            tracing::error!("Clipboard operation attempted without clipboard support");
            return Err(self.fail(ClipboardError::Unsupported));
        }

        Ok(())
    }

    fn fail(&self, error: ClipboardError) -> ClipboardError {
        let message = error.to_string();
        self.state.send_modify(|state| state.last_error = Some(message));
        error
    }
}

fn message_or(error: anyhow::Error, fallback: &str) -> String {
    let message = error.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Poll the clipboard and call `on_text` for every new non-empty text
pub async fn watch_clipboard<F>(backend: Arc<dyn ClipboardBackend>, period: Duration, mut on_text: F)
where
    F: FnMut(String) + Send + 'static,
{
    let mut last_text = String::new();

    let mut interval = time::interval(period);

    loop {
        interval.tick().await;
        if let Ok(text) = backend.read_text().await
            && !text.trim().is_empty()
            && text != last_text
        {
            last_text = text.clone();
            on_text(text);
        }
    }
}
