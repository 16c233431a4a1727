// src/watch/unit.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::watch::watcher::{self, DebouncedWatch};

#[derive(Debug)]
enum UnitState {
    Idle,
    Watching(DebouncedWatch),
    Stopped,
}

/// One watched file paired with its fully-expanded shell command.
///
/// Lifecycle: `idle` → `watching` → `stopped` (terminal). While watching,
/// the unit owns a live subscription on its path and dispatches its command
/// on each debounced change.
#[derive(Debug)]
pub struct WatchUnit {
    filepath: PathBuf,
    command: String,
    window: Duration,
    state: UnitState,
}

impl WatchUnit {
    pub fn new(filepath: PathBuf, command: String, window: Duration) -> Self {
        Self {
            filepath,
            command,
            window,
            state: UnitState::Idle,
        }
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_watching(&self) -> bool {
        matches!(self.state, UnitState::Watching(_))
    }

    /// Subscribe to changes on this unit's path. Only an idle unit starts;
    /// a stopped unit stays stopped.
    pub fn start(&mut self, runner: Arc<dyn CommandRunner>) -> Result<()> {
        if !matches!(self.state, UnitState::Idle) {
            return Ok(());
        }

        let filepath = self.filepath.clone();
        let command = self.command.clone();
        let watch = watcher::subscribe(self.filepath.clone(), self.window, move || {
            debug!(path = ?filepath, "debounced change");
            runner.dispatch(&command);
        })?;

        self.state = UnitState::Watching(watch);
        Ok(())
    }

    /// Cancel the subscription. Idempotent. A pending debounce window is
    /// discarded; an in-flight command keeps running.
    pub fn stop(&mut self) {
        if self.is_watching() {
            debug!(path = ?self.filepath, "stopping watch");
        }
        self.state = UnitState::Stopped;
    }
}
