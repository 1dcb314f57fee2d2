use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod clipboard;
pub mod reload;
pub mod text_input;

use clipboard::{handle_copy, handle_paste};
use reload::{handle_reload, handle_status};
use text_input::handle_text_input;

/// App's main loop. `:quit` cancels `cancel`, which stops every other task
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::debug!("Event loop started");
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        if matches!(event, AppEvent::Quit) {
            tracing::info!("Quit requested");
            cancel.cancel();
            break;
        }

        handle_events(&state, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

pub async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    tracing::debug!("Handling {:?}", std::mem::discriminant(&event));
    match event {
        AppEvent::Query(text) => {
            handle_text_input(state, text, app_to_ui_tx).await?;
        }
        AppEvent::TextInput { text, source } => {
            tracing::info!("Text from {:?}: {}", source, text);
            handle_text_input(state, text, app_to_ui_tx).await?;
        }
        AppEvent::Paste => {
            handle_paste(state, app_to_ui_tx).await?;
        }
        AppEvent::Copy => {
            handle_copy(state, app_to_ui_tx).await?;
        }
        AppEvent::Clear => {
            state.search.clear_search();
            app_to_ui_tx
                .send(AppEvent::ShowMessage("search cleared".to_string()))
                .await?;
        }
        AppEvent::Reload => {
            handle_reload(state, app_to_ui_tx).await?;
        }
        AppEvent::Status => {
            handle_status(state, app_to_ui_tx).await?;
        }
        AppEvent::Quit => {}
        event @ (AppEvent::ShowResult { .. }
        | AppEvent::ShowMessage(_)
        | AppEvent::ShowError(_)) => {
            app_to_ui_tx.send(event).await?;
        }
    }

    Ok(())
}
