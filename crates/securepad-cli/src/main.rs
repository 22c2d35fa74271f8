use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tokio::sync::mpsc;

use securepad_application::PadApp;
use securepad_infrastructure::{ConfigService, FileDocumentStore, LocalIdentityProvider};
use securepad_telemetry::PadLogEvent;

mod commands;
mod repl;

#[derive(Parser)]
#[command(name = "securepad")]
#[command(about = "SecurePad - a password-gated, auto-saving text pad", long_about = None)]
struct Cli {
    /// Directory holding the pads (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Filter for stderr logs when RUST_LOG is unset; warnings are always
    /// shown in the REPL
    #[arg(long, default_value = "off")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<PadLogEvent>();
    securepad_telemetry::init_tracing_with_filter(&cli.log, Some(event_tx))?;

    // Store failures never reach the caller; surface them here instead.
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let component = event.component.as_deref().unwrap_or("securepad");
            eprintln!(
                "{}",
                format!("! {} {}: {}", event.level, component, event.message).red()
            );
        }
    });

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config();

    let store = match cli.data_dir {
        Some(dir) => FileDocumentStore::new(dir),
        None => FileDocumentStore::default_location()?,
    };
    tracing::info!("[Cli] Pads stored under {}", store.root_dir().display());

    let pad = PadApp::new(
        config,
        Arc::new(store),
        Arc::new(LocalIdentityProvider::new()),
    );
    repl::run(pad).await
}
