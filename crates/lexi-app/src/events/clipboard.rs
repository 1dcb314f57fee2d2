use kanal::AsyncSender;
use lexi_types::{AppEvent, SearchOutcome};

use crate::events::text_input::handle_text_input;
use crate::state::AppState;
use crate::ui::clipboard_text;

pub async fn handle_paste(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match state.clipboard.paste_from_clipboard().await {
        Ok(text) if text.is_empty() => {
            app_to_ui_tx
                .send(AppEvent::ShowMessage("clipboard is empty".to_string()))
                .await?;
        }
        Ok(text) => {
            handle_text_input(state, text, app_to_ui_tx).await?;
        }
        Err(e) => {
            app_to_ui_tx.send(AppEvent::ShowError(e.to_string())).await?;
        }
    }

    Ok(())
}

/// Copy the current entry, if any
pub async fn handle_copy(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let SearchOutcome::Found(entry) = state.search.current_result() else {
        app_to_ui_tx
            .send(AppEvent::ShowMessage("nothing to copy".to_string()))
            .await?;
        return Ok(());
    };

    let reply = match state.clipboard.copy_to_clipboard(&clipboard_text(&entry)).await {
        Ok(()) => AppEvent::ShowMessage(format!("copied \"{}\"", entry.word)),
        Err(e) => AppEvent::ShowError(e.to_string()),
    };
    app_to_ui_tx.send(reply).await?;

    Ok(())
}
