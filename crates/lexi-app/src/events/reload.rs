use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_reload(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    state.search.load_words_data().await;
    app_to_ui_tx.send(load_report(state)).await?;
    Ok(())
}

/// Outcome of the most recent load
pub fn load_report(state: &AppState) -> AppEvent {
    match state.search.last_error() {
        Some(error) => AppEvent::ShowError(format!("failed to load words: {}", error)),
        None => AppEvent::ShowMessage(format!("loaded {} words", state.search.word_count())),
    }
}

pub async fn handle_status(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let search = &state.search;
    let mut lines = vec![
        format!("words: {}", search.word_count()),
        format!("loading: {}", search.is_loading()),
        format!("query: {:?}", search.query()),
        format!("clipboard supported: {}", state.clipboard.is_supported()),
    ];
    if let Some(error) = search.last_error() {
        lines.push(format!("load error: {}", error));
    }
    if let Some(error) = state.clipboard.last_error() {
        lines.push(format!("clipboard error: {}", error));
    }

    app_to_ui_tx
        .send(AppEvent::ShowMessage(lines.join("\n")))
        .await?;

    Ok(())
}
