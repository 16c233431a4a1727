// src/manager.rs

//! The watch set manager: owns the current collection of watch units and
//! the transition between sets.
//!
//! The manager is the single writer of the watch set. It consumes typed
//! events from one channel (config-file changes, shutdown), so each set
//! replacement happens on its own loop turn and needs no locking.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::config::{self, FilepathTemplate};
use crate::errors::{FschangeError, Result};
use crate::exec::CommandRunner;
use crate::template::expand_command;
use crate::watch::unit::WatchUnit;
use crate::watch::watcher::{self, DebouncedWatch};

/// Events consumed by the manager's run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerEvent {
    /// The config file changed (already debounced).
    ReloadRequested,
    /// Ctrl-C or equivalent: stop everything and return.
    ShutdownRequested,
}

pub struct WatchSetManager {
    config_path: PathBuf,
    window: Duration,
    runner: Arc<dyn CommandRunner>,
    units: Vec<WatchUnit>,
}

impl WatchSetManager {
    pub fn new(config_path: PathBuf, window: Duration, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config_path,
            window,
            runner,
            units: Vec::new(),
        }
    }

    /// Currently installed units.
    pub fn units(&self) -> &[WatchUnit] {
        &self.units
    }

    /// Read and compile the config for the first time.
    ///
    /// Unlike reloads, an unreadable config here is fatal: there is no
    /// previous watch set to fall back on.
    pub async fn load_initial(&mut self) -> Result<()> {
        let text = self.read_config().await?;
        self.units = self.build_watch_set(&text).await;
        info!(units = self.units.len(), config = ?self.config_path, "watch set installed");
        Ok(())
    }

    /// Tear down the current set and build a replacement from the config.
    ///
    /// The new text is read before anything stops, so an unreadable config
    /// leaves the current set untouched. Changes to watched files while the
    /// swap is in progress are lost, not queued.
    pub async fn reload(&mut self) {
        info!(config = ?self.config_path, "config changed, rebuilding watch set");

        let text = match self.read_config().await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "reload failed, keeping current watch set");
                return;
            }
        };

        self.stop_all();
        self.units = self.build_watch_set(&text).await;
        info!(units = self.units.len(), "watch set replaced");
    }

    /// Run until shutdown, reloading whenever the config file changes.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<ManagerEvent>,
        events_tx: mpsc::Sender<ManagerEvent>,
    ) -> Result<()> {
        self.load_initial().await?;

        // The config file gets the same leading-edge debounce as any
        // watched file. Losing this watch only loses hot reload.
        let _config_watch = self.watch_config(events_tx);

        while let Some(event) = events.recv().await {
            match event {
                ManagerEvent::ReloadRequested => self.reload().await,
                ManagerEvent::ShutdownRequested => {
                    info!("shutdown requested");
                    break;
                }
            }
        }

        self.stop_all();
        Ok(())
    }

    fn watch_config(&self, events_tx: mpsc::Sender<ManagerEvent>) -> Option<DebouncedWatch> {
        let result = watcher::subscribe(self.config_path.clone(), self.window, move || {
            if events_tx.try_send(ManagerEvent::ReloadRequested).is_err() {
                warn!("manager event channel full, dropping reload request");
            }
        });

        match result {
            Ok(watch) => Some(watch),
            Err(err) => {
                warn!(error = %err, "cannot watch config file, hot reload disabled");
                None
            }
        }
    }

    async fn read_config(&self) -> Result<String> {
        info!(config = ?self.config_path, "reading config");
        tokio::fs::read_to_string(&self.config_path)
            .await
            .map_err(|source| FschangeError::ConfigRead {
                path: self.config_path.clone(),
                source,
            })
    }

    /// Compile config text into started watch units.
    ///
    /// Per-line and per-rule failures are logged and skipped: whatever can
    /// be watched, is.
    async fn build_watch_set(&self, text: &str) -> Vec<WatchUnit> {
        let parsed = config::parse_config(text);
        for err in &parsed.errors {
            error!("{err}");
        }

        let (pairs, glob_errors) = config::expand_rules(parsed.rules).await;
        for err in &glob_errors {
            error!("{err}");
        }

        let mut units = Vec::with_capacity(pairs.len());
        for FilepathTemplate { filepath, template } in pairs {
            let command = expand_command(&template, &filepath);
            let mut unit = WatchUnit::new(filepath, command, self.window);
            match unit.start(Arc::clone(&self.runner)) {
                Ok(()) => units.push(unit),
                // e.g. the file vanished between glob expansion and subscribe
                Err(err) => error!("{err}"),
            }
        }
        units
    }

    fn stop_all(&mut self) {
        info!(units = self.units.len(), "stopping watch set");
        for unit in &mut self.units {
            unit.stop();
        }
        self.units.clear();
    }
}
