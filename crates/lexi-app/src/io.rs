use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use lexi_io::ClipboardBackend;
use lexi_types::{AppEvent, TextSource};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Turn one line of user input into an event
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    let Some(command) = line.trim().strip_prefix(':') else {
        return Some(AppEvent::Query(line.to_string()));
    };

    let event = match command.trim() {
        "p" | "paste" => AppEvent::Paste,
        "c" | "copy" => AppEvent::Copy,
        "clear" => AppEvent::Clear,
        "r" | "reload" => AppEvent::Reload,
        "s" | "status" => AppEvent::Status,
        "q" | "quit" | "exit" => AppEvent::Quit,
        "h" | "help" => AppEvent::ShowMessage(HELP.to_string()),
        other => AppEvent::ShowError(format!("unknown command :{}, try :help", other)),
    };

    Some(event)
}

pub const HELP: &str = "\
type a word to look it up
  :paste   look up the clipboard text
  :copy    copy the current entry
  :clear   clear the query
  :reload  reload the word list
  :status  show helper state
  :quit    exit";

/// Read commands from stdin until EOF or cancellation
pub async fn stdin_io(event_tx: AsyncSender<AppEvent>, cancel: CancellationToken) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => break,
        };

        let Some(line) = line else {
            tracing::debug!("stdin closed");
            event_tx.send(AppEvent::Quit).await?;
            break;
        };

        if let Some(event) = parse_command(&line) {
            let quit = matches!(event, AppEvent::Quit);
            event_tx.send(event).await?;
            if quit {
                break;
            }
        }
    }

    Ok(())
}

/// Forward every new clipboard text as input
pub async fn clipboard_io(
    backend: Arc<dyn ClipboardBackend>,
    period: Duration,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("Starting clipboard watcher");

    tokio::select! {
        _ = lexi_io::watch_clipboard(backend, period, move |text| {
            let event = AppEvent::TextInput {
                text: text.trim().to_string(),
                source: TextSource::Clipboard,
            };
            // No spawn here, texts must reach the app in clipboard order
            match event_tx.try_send(event) {
                Ok(true) => {}
                Ok(false) => tracing::warn!("Input queue full, dropping clipboard text"),
                Err(e) => tracing::error!("Failed to send clipboard text to app: {}", e),
            }
        }) => {
            tracing::warn!("Clipboard watcher exited");
        }
        _ = cancel.cancelled() => {
            tracing::info!("Clipboard watcher stopping");
        }
    }

    Ok(())
}
