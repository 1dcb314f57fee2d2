use std::io::Write;

use kanal::AsyncReceiver;
use lexi_types::{AppEvent, SearchOutcome, WordEntry};
use tokio_util::sync::CancellationToken;

/// Prints whatever the event loop wants shown
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        let text = match event {
            AppEvent::ShowResult { query, outcome } => render_outcome(&query, &outcome),
            AppEvent::ShowMessage(message) => message,
            AppEvent::ShowError(message) => format!("error: {}", message),
            other => {
                tracing::debug!("ui ignoring {:?}", std::mem::discriminant(&other));
                continue;
            }
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
    }

    Ok(())
}

pub fn render_outcome(query: &str, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(entry) => render_entry(entry),
        SearchOutcome::NotFound if query.trim().is_empty() => "(empty query)".to_string(),
        SearchOutcome::NotFound => format!("\"{}\" not found", query.trim()),
    }
}

pub fn render_entry(entry: &WordEntry) -> String {
    format!(
        "{}\n  definition: {}\n  mnemonic ({}): {}\n  example: {}",
        entry.word,
        entry.definition,
        entry.mnemonic_type,
        entry.mnemonic_content,
        entry.example_sentence
    )
}

/// Text placed on the clipboard by `:copy`
pub fn clipboard_text(entry: &WordEntry) -> String {
    format!("{} {}", entry.word, entry.definition)
}
