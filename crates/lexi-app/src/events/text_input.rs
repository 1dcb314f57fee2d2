use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::AppState;

/// Make `text` the current query and show what it resolves to
pub async fn handle_text_input(
    state: &AppState,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    state.search.set_search_query(text.clone());
    let outcome = state.search.current_result();

    if !outcome.is_found() && state.search.is_loading() {
        tracing::debug!("Word list still loading, '{}' may show up later", text);
    }

    app_to_ui_tx
        .send(AppEvent::ShowResult {
            query: text,
            outcome,
        })
        .await?;

    Ok(())
}
