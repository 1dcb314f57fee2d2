use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::AppEvent;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::events::reload::load_report;
use crate::io::{clipboard_io, stdin_io};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
            app_to_ui: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Which input and output loops to run
#[derive(Debug, Clone, Copy)]
pub struct TaskOptions {
    pub read_stdin: bool,
    pub print_ui: bool,
    pub watch_clipboard: bool,
}

impl Default for TaskOptions {
    fn default() -> Self {
        Self {
            read_stdin: true,
            print_ui: true,
            watch_clipboard: false,
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn input_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.input_to_app.0.clone()
    }

    pub fn ui_receiver(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_ui.1.clone()
    }

    /// Load the word list once and report the result. Not part of the task
    /// set, finishing it must not end the run.
    pub fn spawn_initial_load(&self) -> JoinHandle<()> {
        let state = self.state.clone();
        let ui_tx = self.channels.app_to_ui.0.clone();

        tokio::spawn(async move {
            if let Err(e) = state.search.spawn_load().await {
                tracing::error!("Initial load panicked: {}", e);
                return;
            }
            if let Err(e) = ui_tx.send(load_report(&state)).await {
                tracing::error!("Failed to report initial load: {}", e);
            }
        })
    }

    /// Spawn the long-lived loops. Any of them exiting ends the run
    pub fn spawn_tasks(&self, options: TaskOptions) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        self.spawn_initial_load();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        if options.print_ui {
            tasks.spawn(ui_loop(
                self.channels.app_to_ui.1.clone(),
                self.cancel_token.child_token(),
            ));
        }

        if options.read_stdin {
            tasks.spawn(stdin_io(
                self.channels.input_to_app.0.clone(),
                self.cancel_token.child_token(),
            ));
        }

        if options.watch_clipboard {
            if self.state.clipboard.is_supported() {
                let period = Duration::from_millis(self.state.config.clipboard.poll_interval_ms);
                tasks.spawn(clipboard_io(
                    self.state.clipboard.backend(),
                    period,
                    self.channels.input_to_app.0.clone(),
                    self.cancel_token.child_token(),
                ));
            } else {
                tracing::warn!("Clipboard watch requested but clipboard is not supported");
            }
        }

        tasks
    }

    /// Wait until the run is cancelled (`:quit`) or a loop exits
    pub async fn wait(&self, tasks: &mut JoinSet<anyhow::Result<()>>) {
        tokio::select! {
            _ = self.cancel_token.cancelled() => {}
            Some(result) = tasks.join_next() => {
                match result {
                    Ok(Ok(())) => tracing::warn!("task exited"),
                    Ok(Err(e)) => tracing::error!("task failed: {e}"),
                    Err(e) => tracing::error!("task panicked: {e}"),
                }
            }
        }
    }

    /// Cancel every loop, let them drain briefly, abort the rest
    pub async fn shutdown(&self, mut tasks: JoinSet<anyhow::Result<()>>) {
        self.cancel_token.cancel();

        let drained = tokio::time::timeout(Duration::from_millis(200), async {
            while tasks.join_next().await.is_some() {}
        })
        .await;
        if drained.is_err() {
            tasks.shutdown().await;
        }
    }
}
