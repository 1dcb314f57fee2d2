use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use lexi_config::Config;
use lexi_config::log::LogConfig;
use lexi_types::SearchOutcome;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;

use self::controller::{AppController, TaskOptions};
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "lexi", about = "Vocabulary lookup with mnemonics")]
struct Cli {
    /// JSON config file, environment variables are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read the word list from this file instead of HTTP
    #[arg(long)]
    file: Option<String>,

    /// Origin serving words.json
    #[arg(long)]
    base_url: Option<String>,

    /// Look up every new clipboard text automatically
    #[arg(long)]
    watch: bool,

    #[arg(long)]
    no_clipboard: bool,

    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a single word and exit
    Lookup { word: String },
    /// Look up the clipboard text and exit
    Paste,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&config.log);

    let runtime = tokio::runtime::Runtime::new()?;
    let code = runtime.block_on(run(cli, config));
    // Blocking stdin reads can't be cancelled, don't wait on them
    runtime.shutdown_timeout(Duration::from_millis(100));

    code
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<ExitCode> {
    let watch = cli.watch || config.clipboard.watch;
    let state = Arc::new(AppState::new(config)?);

    match cli.command {
        Some(Command::Lookup { word }) => lookup_once(&state, &word).await,
        Some(Command::Paste) => paste_once(&state).await,
        None => {
            interactive(state, watch).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn lookup_once(state: &AppState, word: &str) -> anyhow::Result<ExitCode> {
    state.search.load_words_data().await;
    if let Some(error) = state.search.last_error() {
        eprintln!("error: failed to load words: {}", error);
        return Ok(ExitCode::FAILURE);
    }

    let outcome = state.search.search_word(word);
    println!("{}", ui::render_outcome(word, &outcome));

    Ok(match outcome {
        SearchOutcome::Found(_) => ExitCode::SUCCESS,
        SearchOutcome::NotFound => ExitCode::from(2),
    })
}

async fn paste_once(state: &AppState) -> anyhow::Result<ExitCode> {
    match state.clipboard.paste_from_clipboard().await {
        Ok(text) if text.is_empty() => {
            eprintln!("clipboard is empty");
            Ok(ExitCode::FAILURE)
        }
        Ok(text) => lookup_once(state, &text).await,
        Err(e) => {
            eprintln!("error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn interactive(state: Arc<AppState>, watch: bool) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(TaskOptions {
        watch_clipboard: watch,
        ..TaskOptions::default()
    });

    println!("{}", io::HELP);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = controller.wait(&mut tasks) => {}
    }

    controller.shutdown(tasks).await;

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => Config::new(),
    };

    if let Some(file) = &cli.file {
        config.words.file = Some(file.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config.words.base_url = base_url.clone();
    }
    if cli.no_clipboard {
        config.clipboard.enabled = false;
    }
    if cli.json_logs {
        config.log.json = true;
    }

    Ok(config)
}

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[cfg(test)]
mod tests;
