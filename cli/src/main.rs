//! CLI entrypoint for tutor-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tutor_application::{
    ChatSessionController, FixedPrompt, NoTranscriptLogger, TranscriptLogger, UserPrompt,
};
use tutor_infrastructure::{ConfigLoader, FileConfig, HttpChatBackend, JsonlTranscriptLogger};
use tutor_presentation::{ChatRepl, Cli, ConsolePrompt, ConsoleView, write_snapshot};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
        config.validate()?;
    }

    if cli.no_color || !config.ui.color {
        colored::control::set_override(false);
    }

    info!("Starting tutor-chat against {}", config.server.base_url);

    // === Dependency Injection ===
    let backend = Arc::new(
        HttpChatBackend::new(&config.server.base_url).context("Failed to create HTTP client")?,
    );
    let view = Arc::new(
        ConsoleView::new(config.server.base_url.clone()).with_sources(config.ui.show_sources),
    );
    let one_shot = cli.message.is_some();
    let prompt: Arc<dyn UserPrompt> = if one_shot {
        Arc::new(FixedPrompt::decline())
    } else {
        Arc::new(ConsolePrompt::for_view(&view))
    };

    let controller = ChatSessionController::new(backend, view.clone(), prompt)
        .with_transcript_logger(transcript_logger(&cli, &config));

    match cli.message {
        Some(message) => {
            controller.send_message(&message).await;
        }
        None => {
            let repl = ChatRepl::new(controller, view.clone());
            repl.run().await?;
        }
    }

    if let Some(path) = &cli.export_html {
        write_snapshot(&view, path)
            .with_context(|| format!("Failed to export chat to {}", path.display()))?;
        println!("Exported chat to {}", path.display());
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Stdout is the chat itself, so logs go to a file unless `--log-stderr`
/// is given or no data directory is available.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = dirs::data_dir().map(|d| d.join("tutor-chat").join("logs"));

    match log_dir {
        Some(dir) if !cli.log_stderr && std::fs::create_dir_all(&dir).is_ok() => {
            let appender = tracing_appender::rolling::daily(dir, "tutor-chat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// Pick the transcript logger: `--transcript` wins over configuration.
fn transcript_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn TranscriptLogger> {
    let path: Option<PathBuf> = cli
        .transcript
        .clone()
        .or_else(|| config.transcript.resolved_path());

    let Some(path) = path else {
        return Arc::new(NoTranscriptLogger);
    };

    match JsonlTranscriptLogger::open(&path) {
        Ok(logger) => {
            info!("Recording transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open transcript {}: {}", path.display(), e);
            Arc::new(NoTranscriptLogger)
        }
    }
}
