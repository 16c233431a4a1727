// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod manager;
pub mod template;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::cli::CliArgs;
use crate::exec::ShellRunner;
use crate::manager::{ManagerEvent, WatchSetManager};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config path resolution
/// - the shell command runner
/// - the watch set manager and its event loop
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = resolve_config_path(&args);
    let window = Duration::from_millis(args.debounce_ms);

    let (events_tx, events_rx) = mpsc::channel::<ManagerEvent>(16);

    // Ctrl-C → graceful shutdown.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(ManagerEvent::ShutdownRequested).await;
        });
    }

    let runner = Arc::new(ShellRunner);
    let manager = WatchSetManager::new(config_path, window, runner);
    manager.run(events_rx, events_tx).await?;
    Ok(())
}

fn resolve_config_path(args: &CliArgs) -> PathBuf {
    match &args.config {
        Some(path) => path.clone(),
        None => config::default_config_path(),
    }
}
